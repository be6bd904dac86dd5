//! Load-time startup.
//!
//! Off unless the `auto-init` feature is built in and `FIPSGATE_AUTO_INIT`
//! is present in the environment, so test harnesses and applications keep
//! control over when startup happens. `FIPSGATE_SKIP_AUTO_INIT` wins over
//! both.

#![allow(unsafe_code)]

/// Environment variable that turns on load-time startup.
pub(crate) const AUTO_INIT_VAR: &str = "FIPSGATE_AUTO_INIT";
/// Environment variable that suppresses load-time startup.
pub(crate) const SKIP_AUTO_INIT_VAR: &str = "FIPSGATE_SKIP_AUTO_INIT";

pub(crate) fn auto_init_requested() -> bool {
    std::env::var_os(AUTO_INIT_VAR).is_some() && std::env::var_os(SKIP_AUTO_INIT_VAR).is_none()
}

#[ctor::ctor]
fn fipsgate_auto_init() {
    if !auto_init_requested() {
        return;
    }
    // Aborts on failure.
    let state = crate::init();
    tracing::debug!(version = %state.selected_version, "load-time startup complete");
}
