//! Behavior tests for the version registry
//!
//! Exercises the observable registration contract: append-only bindings,
//! zero-address rejection, absent reads, key independence, and notification
//! exactness.
//!
//! These tests follow the same principles as the rest of the suite:
//! - Test behavior, not implementation
//! - One failure mode per test
//! - Verify values, not just is_ok()

use std::sync::Arc;

use registry_store::{Address, Error, MemoryEventLog, VersionRegistry};

// ============================================================================
// Test Helpers
// ============================================================================

fn addr(byte: u8) -> Address {
    Address::new([byte; 20])
}

fn setup_with_log() -> (VersionRegistry, Arc<MemoryEventLog>) {
    let log = Arc::new(MemoryEventLog::new());
    let registry = VersionRegistry::with_sink(log.clone());
    (registry, log)
}

// ============================================================================
// Registration and Reads
// ============================================================================

#[test]
fn test_registers_the_given_version() {
    let registry = VersionRegistry::new();

    registry.add_version("0", addr(0x0a)).unwrap();

    assert_eq!(registry.get_version("0"), Some(addr(0x0a)));
}

#[test]
fn test_allows_registering_another_version() {
    let registry = VersionRegistry::new();

    registry.add_version("0", addr(0x0a)).unwrap();
    registry.add_version("1", addr(0x0b)).unwrap();

    assert_eq!(registry.get_version("0"), Some(addr(0x0a)));
    assert_eq!(registry.get_version("1"), Some(addr(0x0b)));
}

#[test]
fn test_unregistered_version_reads_absent() {
    let registry = VersionRegistry::new();
    assert_eq!(registry.get_version("0"), None);
}

#[test]
fn test_registering_never_affects_other_keys() {
    let registry = VersionRegistry::new();
    registry.add_version("0", addr(0x0a)).unwrap();

    registry.add_version("1", addr(0x0b)).unwrap();

    // Prior binding retrievable, unchanged
    assert_eq!(registry.get_version("0"), Some(addr(0x0a)));
}

// ============================================================================
// Zero Address Rejection
// ============================================================================

#[test]
fn test_zero_address_rejected_for_new_version() {
    let registry = VersionRegistry::new();

    let result = registry.add_version("0", Address::ZERO);

    assert_eq!(result, Err(Error::ZeroImplementation));
    assert_eq!(registry.get_version("0"), None);
}

#[test]
fn test_version_still_registrable_after_zero_rejection() {
    let registry = VersionRegistry::new();
    let _ = registry.add_version("0", Address::ZERO);

    registry.add_version("0", addr(0x0a)).unwrap();

    assert_eq!(registry.get_version("0"), Some(addr(0x0a)));
}

#[test]
fn test_zero_address_rejected_for_registered_version() {
    let registry = VersionRegistry::new();
    registry.add_version("0", addr(0x0a)).unwrap();

    // Both preconditions are violated here; the call must fail either way
    let result = registry.add_version("0", Address::ZERO);

    assert!(result.is_err());
    assert_eq!(registry.get_version("0"), Some(addr(0x0a)));
}

// ============================================================================
// Duplicate Rejection (Append-Only)
// ============================================================================

#[test]
fn test_rebinding_same_address_rejected() {
    let registry = VersionRegistry::new();
    registry.add_version("0", addr(0x0a)).unwrap();

    // Even the identical binding is refused: registration fires once per key
    let result = registry.add_version("0", addr(0x0a));

    assert!(matches!(result, Err(Error::VersionExists(_))));
    assert_eq!(registry.get_version("0"), Some(addr(0x0a)));
}

#[test]
fn test_duplicate_rejection_reports_the_version() {
    let registry = VersionRegistry::new();
    registry.add_version("1.2.3", addr(0x0a)).unwrap();

    match registry.add_version("1.2.3", addr(0x0b)) {
        Err(Error::VersionExists(version)) => assert_eq!(version.as_str(), "1.2.3"),
        other => panic!("Expected VersionExists, got {:?}", other),
    }
}

#[test]
fn test_other_versions_registrable_after_duplicate_rejection() {
    let registry = VersionRegistry::new();
    registry.add_version("0", addr(0x0a)).unwrap();
    let _ = registry.add_version("0", addr(0x0a));

    registry.add_version("1", addr(0x0b)).unwrap();

    assert_eq!(registry.get_version("0"), Some(addr(0x0a)));
    assert_eq!(registry.get_version("1"), Some(addr(0x0b)));
}

#[test]
fn test_repeating_a_rejected_call_fails_identically() {
    let registry = VersionRegistry::new();
    registry.add_version("0", addr(0x0a)).unwrap();

    let first = registry.add_version("0", addr(0x0b));
    let second = registry.add_version("0", addr(0x0b));

    assert_eq!(first, second);
}

// ============================================================================
// Notification Exactness
// ============================================================================

#[test]
fn test_successful_add_emits_exactly_one_event() {
    let (registry, log) = setup_with_log();

    registry.add_version("0", addr(0x0a)).unwrap();

    let events = log.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].version.as_str(), "0");
    assert_eq!(events[0].implementation, addr(0x0a));
}

#[test]
fn test_failed_add_emits_no_event() {
    let (registry, log) = setup_with_log();
    registry.add_version("0", addr(0x0a)).unwrap();

    let _ = registry.add_version("0", addr(0x0b)); // duplicate
    let _ = registry.add_version("1", Address::ZERO); // zero address
    let _ = registry.add_version("", addr(0x0c)); // invalid identifier

    assert_eq!(log.len(), 1);
}

#[test]
fn test_sink_sees_registrations_in_order() {
    let (registry, log) = setup_with_log();

    registry.add_version("0", addr(0x0a)).unwrap();
    registry.add_version("1", addr(0x0b)).unwrap();
    registry.add_version("2", addr(0x0c)).unwrap();

    let events = log.events();
    let versions: Vec<&str> = events.iter().map(|e| e.version.as_str()).collect();
    assert_eq!(versions, vec!["0", "1", "2"]);
}

#[test]
fn test_sink_log_matches_registry_history() {
    let (registry, log) = setup_with_log();

    registry.add_version("0", addr(0x0a)).unwrap();
    registry.add_version("1", addr(0x0b)).unwrap();
    let _ = registry.add_version("0", addr(0x0c));

    // History is reconstructible from the sink alone
    assert_eq!(log.events(), registry.history());
}

#[test]
fn test_sink_may_reenter_the_registry() {
    use registry_store::{EventSink, VersionAdded};
    use std::sync::OnceLock;

    // A sink that reads the binding back out of the registry during
    // delivery. The binding is committed and the lock released before the
    // sink runs, so this must neither block nor observe an absent key.
    struct ReadingSink {
        registry: OnceLock<Arc<VersionRegistry>>,
    }

    impl EventSink for ReadingSink {
        fn version_added(&self, event: &VersionAdded) {
            let registry = self.registry.get().expect("registry wired before use");
            assert_eq!(
                registry.get_version(event.version.as_str()),
                Some(event.implementation)
            );
        }
    }

    let sink = Arc::new(ReadingSink {
        registry: OnceLock::new(),
    });
    let registry = Arc::new(VersionRegistry::with_sink(sink.clone()));
    let _ = sink.registry.set(registry.clone());

    registry.add_version("0", addr(0x0a)).unwrap();
    assert_eq!(registry.get_version("0"), Some(addr(0x0a)));
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_history_reconstructs_bindings() {
    let registry = VersionRegistry::new();
    registry.add_version("0", addr(0x0a)).unwrap();
    registry.add_version("1", addr(0x0b)).unwrap();
    registry.add_version("2", addr(0x0c)).unwrap();

    for record in registry.history() {
        assert_eq!(
            registry.get_version(record.version.as_str()),
            Some(record.implementation)
        );
    }
    assert_eq!(registry.history().len(), registry.len());
}
