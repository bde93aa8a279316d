//! Version identifier validation
//!
//! Version identifiers are opaque Unicode strings with specific constraints,
//! enforced at every registration:
//! - must be valid UTF-8 (guaranteed by Rust's &str type)
//! - must not be empty
//! - must not contain NUL bytes (\0)
//! - must not exceed `MAX_VERSION_BYTES` (256)
//!
//! Equality between identifiers is exact string equality. Beyond the rules
//! above, no structure is imposed: "0", "1.2.3", and "beta" are all valid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum version identifier length in bytes
pub const MAX_VERSION_BYTES: usize = 256;

/// Validate a version identifier
///
/// This is the validation function applied by all registration paths.
///
/// # Examples
///
/// ```
/// use registry_core::version::validate_version;
///
/// // Valid identifiers
/// assert!(validate_version("0").is_ok());
/// assert!(validate_version("1.2.3-rc.1").is_ok());
///
/// // Invalid identifiers
/// assert!(validate_version("").is_err()); // empty
/// assert!(validate_version("a\x00b").is_err()); // contains NUL
/// ```
pub fn validate_version(version: &str) -> Result<(), VersionError> {
    // Rule 1: identifier cannot be empty
    if version.is_empty() {
        return Err(VersionError::Empty);
    }

    // Rule 2: identifier cannot contain NUL bytes
    if version.contains('\x00') {
        return Err(VersionError::ContainsNul);
    }

    // Rule 3: identifier cannot exceed max length
    let len = version.len();
    if len > MAX_VERSION_BYTES {
        return Err(VersionError::TooLong {
            actual: len,
            max: MAX_VERSION_BYTES,
        });
    }

    Ok(())
}

/// A validated version identifier
///
/// Construction goes through [`Version::new`] (or `FromStr`), so a held
/// `Version` always satisfies the validation rules of this module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version(String);

impl Version {
    /// Create a version identifier, validating it
    pub fn new(version: impl Into<String>) -> Result<Self, VersionError> {
        let version = version.into();
        validate_version(&version)?;
        Ok(Version(version))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::new(s)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Version::new(s)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> String {
        version.0
    }
}

/// Version identifier validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    /// Identifier is empty (length 0)
    #[error("Version identifier cannot be empty")]
    Empty,

    /// Identifier contains NUL byte (\0)
    #[error("Version identifier cannot contain NUL bytes")]
    ContainsNul,

    /// Identifier exceeds maximum length
    #[error("Version identifier too long: {actual} bytes exceeds maximum {max}")]
    TooLong {
        /// Actual identifier length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },
}
