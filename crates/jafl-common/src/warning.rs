//! Converter warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the markup, render and book components to report input that is
//! accepted but probably not what the author meant.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of messages we've already printed (to deduplicate)
static SEEN: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether verbose-only notes are printed.
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Record `key`, returning whether it was new.
fn first_time(key: String) -> bool {
    SEEN.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about suspicious input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Markup", "stray <item> outside any section was dropped");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if first_time(format!("[{component}] {message}")) {
        log::debug!(target: "jafl", "warning from {component}: {message}");
        eprintln!("{}", format!("[JAFL {component}] ⚠ {message}").yellow());
    }
}

/// Forget every printed message (call when starting a new build)
pub fn clear_warnings() {
    if let Some(seen) = SEEN
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_mut()
    {
        seen.clear();
    }
}

/// Enable or disable verbose-only notes.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Whether verbose mode is enabled.
#[must_use]
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print a note only in verbose mode, e.g. for a tag with no rendering rule.
/// Deduplicated like warnings.
pub fn note_verbose(component: &str, message: &str) {
    if is_verbose() && first_time(format!("[{component}] note: {message}")) {
        eprintln!("{}", format!("[JAFL {component}] {message}").dimmed());
    }
}
