//! RegistryDB - embedded append-only version registry
//!
//! RegistryDB maps version identifiers to implementation addresses. Versions
//! are registered once and never rebound or removed; the zero address is
//! rejected; each successful registration emits exactly one `VersionAdded`
//! notification.
//!
//! # Quick Start
//!
//! ```
//! use registrydb::{Address, VersionRegistry};
//!
//! let registry = VersionRegistry::new();
//! let implementation = Address::new([0x11; 20]);
//!
//! // Bind a version
//! registry.add_version("1.0.0", implementation)?;
//!
//! // Look it up
//! assert_eq!(registry.get_version("1.0.0"), Some(implementation));
//!
//! // Unregistered versions read as absent
//! assert_eq!(registry.get_version("2.0.0"), None);
//! # Ok::<(), registrydb::Error>(())
//! ```
//!
//! # Architecture
//!
//! The public API lives in `registry-store` (the [`VersionRegistry`]
//! primitive and its notification sinks) over `registry-core` (validated
//! [`Version`] identifiers, [`Address`] handles, the error taxonomy). This
//! crate re-exports the whole surface.

pub use registry_store::*;
