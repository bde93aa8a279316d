//! Error types for the version registry
//!
//! This module defines all error types surfaced by registration. We use
//! `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every rejection is a permanent refusal of that specific call's arguments:
//! nothing is caught or retried internally, and the registry state is left
//! unchanged by a failed call.

use crate::version::{Version, VersionError};
use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the version registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Supplied implementation address is the zero sentinel
    #[error("Invalid implementation: the zero address cannot be registered")]
    ZeroImplementation,

    /// Supplied version identifier failed validation
    #[error("Invalid version: {0}")]
    InvalidVersion(#[from] VersionError),

    /// Supplied version identifier already has a binding
    #[error("Version already registered: {0}")]
    VersionExists(Version),
}
