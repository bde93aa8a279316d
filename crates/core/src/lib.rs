//! Core types for RegistryDB
//!
//! This crate defines the foundational types used throughout the system:
//! - Version: validated opaque version identifier
//! - Address: 20-byte implementation address with zero sentinel
//! - VersionAdded: notification record for successful registrations
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod error;
pub mod event;
pub mod version;

// Re-export commonly used types
pub use address::{Address, AddressError};
pub use error::{Error, Result};
pub use event::VersionAdded;
pub use version::{validate_version, Version, VersionError, MAX_VERSION_BYTES};
