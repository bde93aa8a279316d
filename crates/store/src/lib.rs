//! Version registry primitive for RegistryDB
//!
//! This crate provides [`VersionRegistry`], an append-only map from version
//! identifiers to implementation addresses, plus the notification plumbing
//! around it ([`EventSink`], [`MemoryEventLog`]).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod registry;
pub mod sink;

pub use registry::VersionRegistry;
pub use sink::{EventSink, MemoryEventLog};

// Re-export core types so most callers need only this crate
pub use registry_core::{
    validate_version, Address, AddressError, Error, Result, Version, VersionAdded, VersionError,
    MAX_VERSION_BYTES,
};
