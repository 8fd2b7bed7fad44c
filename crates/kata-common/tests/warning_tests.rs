//! Integration tests for the deduplicated warning registry.

use kata_common::warning::{has_warned, warn_once};

// The registry is process-global, so each test uses its own component name
// and never clears entries another test relies on.

#[test]
fn test_warn_once_records_message() {
    assert!(!has_warned("record", "first"));
    warn_once("record", "first");
    assert!(has_warned("record", "first"));
}

#[test]
fn test_warn_once_is_keyed_by_component() {
    warn_once("component-a", "shared text");
    assert!(has_warned("component-a", "shared text"));
    assert!(!has_warned("component-b", "shared text"));
}

#[test]
fn test_repeated_warning_stays_recorded() {
    warn_once("repeat", "same");
    warn_once("repeat", "same");
    assert!(has_warned("repeat", "same"));
}
