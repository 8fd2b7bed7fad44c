//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about accepted-but-unusual input (prints once per unique message)
///
/// # Example
/// ```
/// kata_common::warning::warn_once("CSS", "non-standard combinator '>>'");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message));

    if should_print {
        eprintln!("{}", format!("[Kata {component}] ⚠ {message}").yellow());
    }
}

/// Whether `warn_once` has already reported this message.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    let guard = WARNED.lock().unwrap();
    guard
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
