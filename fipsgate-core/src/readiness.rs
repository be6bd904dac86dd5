//! Process readiness state.
//!
//! Written exactly once by the startup pass and read-only afterwards. The
//! `OnceLock` serializes concurrent or repeated initialization: the first
//! caller runs the pass, later callers block until it finishes and then see
//! the same record. A failed pass terminates the process inside the
//! initializer, so readers never observe a partial state.

use std::sync::OnceLock;

use fipsgate_types::{CandidateVersion, FipsDirective};

static READINESS: OnceLock<ReadinessState> = OnceLock::new();

/// Outcome of the startup pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessState {
    /// Provider version that was initialized.
    pub selected_version: CandidateVersion,
    /// The version was chosen as a non-FIPS fallback.
    pub fallback_used: bool,
    /// Directive derived from the environment and host.
    pub directive: FipsDirective,
    /// Provider FIPS flag after policy was applied.
    pub fips_enabled: bool,
    /// Compliance was explicitly demanded; the guards are armed.
    pub fips_required: bool,
    /// Provider identity, for diagnostics.
    pub version_text: String,
    /// The provider offers HKDF.
    pub supports_hkdf: bool,
    /// Executable suffixes exempt from `unreachable_except_tests`.
    pub test_suffixes: Vec<String>,
}

/// Installs the state produced by `compute`, running it only if no state has
/// been installed yet. Returns the installed state either way.
pub(crate) fn install_with<F>(compute: F) -> &'static ReadinessState
where
    F: FnOnce() -> ReadinessState,
{
    let mut ran = false;
    let state = READINESS.get_or_init(|| {
        ran = true;
        compute()
    });
    if !ran {
        tracing::debug!(version = %state.selected_version, "startup already completed, reusing state");
    }
    state
}

/// Returns the readiness state, or `None` before startup has completed.
#[must_use]
pub fn readiness() -> Option<&'static ReadinessState> {
    READINESS.get()
}

/// Returns `true` if FIPS compliance is being enforced for this process.
///
/// This is `false` before startup completes and whenever the directive was
/// anything other than force-enable.
#[must_use]
pub fn is_enabled() -> bool {
    READINESS.get().is_some_and(|state| state.fips_required)
}
