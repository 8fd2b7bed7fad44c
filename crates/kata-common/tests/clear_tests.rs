//! Clearing lives in its own test binary so it cannot race the other
//! registry tests.

use kata_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_clear_warnings_forgets_messages() {
    warn_once("clear", "gone soon");
    assert!(has_warned("clear", "gone soon"));
    clear_warnings();
    assert!(!has_warned("clear", "gone soon"));
}
