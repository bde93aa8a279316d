//! Registration notifications
//!
//! Every successful registration produces exactly one [`VersionAdded`]
//! record; failed registrations produce none. The record carries the version
//! identifier and the implementation address, in that order, and nothing
//! else. Ordering metadata is the record's position in the log that holds
//! it.

use crate::address::Address;
use crate::version::Version;
use serde::{Deserialize, Serialize};

/// Notification emitted on each successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionAdded {
    /// The registered version identifier
    pub version: Version,
    /// The implementation the version was bound to
    pub implementation: Address,
}
