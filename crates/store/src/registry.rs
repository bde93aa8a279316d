//! VersionRegistry: append-only version-to-implementation bindings
//!
//! ## Design
//!
//! 1. **Append-Only**: a version, once bound, is never rebound or removed.
//! 2. **Validated Inputs**: the zero address and malformed identifiers are
//!    rejected before any mutation.
//! 3. **Atomic Registration**: the duplicate check, the insert, and the
//!    history append happen under one write-lock critical section. Two
//!    concurrent registrations of the same version cannot both succeed.
//!
//! ## Thread Safety
//!
//! `VersionRegistry` is `Send + Sync`. Interior state sits behind a
//! `parking_lot::RwLock` to avoid cascading panics from mutex poisoning.
//! Notifications are delivered after the write lock is released, so a sink
//! may safely call back into the registry.

use parking_lot::RwLock;
use registry_core::error::Result;
use registry_core::{Address, Error, Version, VersionAdded};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::sink::EventSink;

/// Append-only registry of version-to-implementation bindings
///
/// Created empty; entries are added one at a time via [`add_version`] and
/// never removed. Each instance is independent; there is no process-global
/// registry.
///
/// [`add_version`]: VersionRegistry::add_version
///
/// # Example
///
/// ```
/// use registry_store::VersionRegistry;
/// use registry_core::Address;
///
/// let registry = VersionRegistry::new();
/// let implementation = Address::new([0x11; 20]);
///
/// registry.add_version("1.0.0", implementation)?;
/// assert_eq!(registry.get_version("1.0.0"), Some(implementation));
/// assert_eq!(registry.get_version("2.0.0"), None);
/// # Ok::<(), registry_core::Error>(())
/// ```
pub struct VersionRegistry {
    inner: RwLock<Inner>,
    sink: Option<Arc<dyn EventSink>>,
}

#[derive(Default)]
struct Inner {
    versions: HashMap<Version, Address>,
    history: Vec<VersionAdded>,
}

impl VersionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        VersionRegistry {
            inner: RwLock::new(Inner::default()),
            sink: None,
        }
    }

    /// Create an empty registry that notifies `sink` on each registration
    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        VersionRegistry {
            inner: RwLock::new(Inner::default()),
            sink: Some(sink),
        }
    }

    /// Bind `version` to `implementation`
    ///
    /// Preconditions, checked in order before any mutation:
    /// 1. `implementation` must not be the zero address
    ///    ([`Error::ZeroImplementation`])
    /// 2. `version` must be a valid identifier ([`Error::InvalidVersion`])
    /// 3. `version` must not already be bound ([`Error::VersionExists`])
    ///
    /// On success the binding is installed, one [`VersionAdded`] record is
    /// appended to the history, and the sink (if any) receives exactly one
    /// notification. On failure nothing changes and nothing is emitted.
    pub fn add_version(&self, version: &str, implementation: Address) -> Result<()> {
        if implementation.is_zero() {
            return Err(Error::ZeroImplementation);
        }
        let version = Version::new(version)?;

        let event = {
            let mut inner = self.inner.write();
            if inner.versions.contains_key(&version) {
                return Err(Error::VersionExists(version));
            }

            let event = VersionAdded {
                version: version.clone(),
                implementation,
            };
            inner.versions.insert(version, implementation);
            inner.history.push(event.clone());
            event
        };

        debug!(
            version = %event.version,
            implementation = %event.implementation,
            "version registered"
        );

        // Delivered outside the critical section: the binding is already
        // visible, and the sink cannot roll it back.
        if let Some(sink) = &self.sink {
            sink.version_added(&event);
        }

        Ok(())
    }

    /// Look up the implementation bound to `version`
    ///
    /// Returns `None` if the version was never registered. An identifier
    /// that would fail registration validation is simply absent, not an
    /// error.
    pub fn get_version(&self, version: &str) -> Option<Address> {
        let version = Version::new(version).ok()?;
        self.inner.read().versions.get(&version).copied()
    }

    /// Whether `version` has a binding
    pub fn has_version(&self, version: &str) -> bool {
        self.get_version(version).is_some()
    }

    /// All registered version identifiers, in no particular order
    pub fn versions(&self) -> Vec<Version> {
        self.inner.read().versions.keys().cloned().collect()
    }

    /// Registration history, oldest first
    ///
    /// Contains exactly one record per successful registration and fully
    /// reconstructs the current bindings.
    pub fn history(&self) -> Vec<VersionAdded> {
        self.inner.read().history.clone()
    }

    /// Number of registered versions
    pub fn len(&self) -> usize {
        self.inner.read().versions.len()
    }

    /// Whether no version has been registered
    pub fn is_empty(&self) -> bool {
        self.inner.read().versions.is_empty()
    }
}

impl Default for VersionRegistry {
    fn default() -> Self {
        VersionRegistry::new()
    }
}
