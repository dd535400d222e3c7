//! Runtime configuration.
//!
//! The module exposes the `fail_on_pending` flag controlling whether a run
//! with pending scenarios counts as a failure.

use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable read by [`fail_on_pending`].
pub const FAIL_ON_PENDING_ENV: &str = "FRIDAY_FAIL_ON_PENDING";

const OVERRIDE_UNSET: u8 = 0;
const OVERRIDE_FALSE: u8 = 1;
const OVERRIDE_TRUE: u8 = 2;

static FAIL_ON_PENDING_OVERRIDE: AtomicU8 = AtomicU8::new(OVERRIDE_UNSET);

/// Parse a boolean written the way people write them in shells.
///
/// ```
/// use friday::config::parse_env_bool;
///
/// assert_eq!(parse_env_bool(" yes "), Some(true));
/// assert_eq!(parse_env_bool("Off"), Some(false));
/// assert_eq!(parse_env_bool("maybe"), None);
/// ```
#[must_use]
pub fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "Yes" | "on" | "ON" | "On" => Some(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "No" | "off" | "OFF" | "Off" => {
            Some(false)
        }
        _ => None,
    }
}

fn env_fail_on_pending() -> Option<bool> {
    let value = std::env::var(FAIL_ON_PENDING_ENV).ok()?;
    let parsed = parse_env_bool(&value);
    if parsed.is_none() {
        log::warn!("ignoring {FAIL_ON_PENDING_ENV}={value:?}: not a boolean");
    }
    parsed
}

fn override_state() -> Option<bool> {
    match FAIL_ON_PENDING_OVERRIDE.load(Ordering::Relaxed) {
        OVERRIDE_FALSE => Some(false),
        OVERRIDE_TRUE => Some(true),
        _ => None,
    }
}

/// Determine whether pending scenarios should fail the run.
///
/// An in-process override wins over the environment; the default is
/// `false`.
#[must_use]
pub fn fail_on_pending() -> bool {
    override_state()
        .or_else(env_fail_on_pending)
        .unwrap_or(false)
}

/// Override the `fail_on_pending` flag for the current process.
///
/// Call [`clear_fail_on_pending_override`] to restore environment driven
/// behaviour.
pub fn set_fail_on_pending(enabled: bool) {
    let value = if enabled {
        OVERRIDE_TRUE
    } else {
        OVERRIDE_FALSE
    };
    FAIL_ON_PENDING_OVERRIDE.store(value, Ordering::Relaxed);
}

/// Remove any in-process override for the `fail_on_pending` flag.
pub fn clear_fail_on_pending_override() {
    FAIL_ON_PENDING_OVERRIDE.store(OVERRIDE_UNSET, Ordering::Relaxed);
}
