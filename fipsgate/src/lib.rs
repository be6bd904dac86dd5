#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! fipsgate - startup-time cryptographic provider selection
//!
//! Picks the provider release line a process will use, enforces the requested
//! FIPS policy on it before any other code runs, and exposes guards for code
//! paths that must never execute while compliance is enforced. If the policy
//! cannot be met the process aborts; it never continues with a weaker posture
//! than was asked for.
//!
//! ## Startup
//!
//! ```rust,no_run
//! fn main() {
//!     let state = fipsgate::init();
//!     if fipsgate::is_enabled() {
//!         println!("FIPS mode enforced by {}", state.version_text);
//!     }
//! }
//! ```
//!
//! With the `auto-init` feature the same pass runs from a load-time
//! constructor when `FIPSGATE_AUTO_INIT` is set in the environment.
//!
//! ## Guards
//!
//! ```rust,no_run
//! fn legacy_md5_path() {
//!     // Aborts when FIPS is enforced, except inside test binaries.
//!     fipsgate::unreachable_except_tests();
//!     // ...
//! }
//! ```
//!
//! ## Environment
//!
//! | variable | effect |
//! |---|---|
//! | `FIPSGATE_VERSION_OVERRIDE` | non-empty: initialize this version, skip the search |
//! | `FIPSGATE_FIPS` | `0`: force off, `1`: force on, other: provider default |
//! | `FIPSGATE_AUTO_INIT` | with `auto-init`: run startup at load time |
//!
//! When `FIPSGATE_FIPS` is unset and `/proc/sys/crypto/fips_enabled` reads `1`,
//! FIPS mode is forced on.
//!
//! ## Primitives
//!
//! The primitive surface of the provider is re-exported under [`primitives`].
//! fipsgate implements none of it.

pub use fipsgate_core as core;
pub use fipsgate_types as types;

// ============================================================================
// Startup
// ============================================================================

pub use fipsgate_core::{
    // Constants
    COMPONENT,
    VERSION,
    // Initialization
    init,
    init_from_inputs,
    init_with,
    // State
    ReadinessState,
    is_enabled,
    readiness,
    StartupInputs,
};

// ============================================================================
// Guards
// ============================================================================

pub use fipsgate_core::{executing_test, unreachable, unreachable_except_tests};

// ============================================================================
// Types and Errors
// ============================================================================

pub use fipsgate_core::{
    AwsLcProvider, CandidateVersion, CoreError, CryptoProvider, FipsDirective, GateConfig,
    HostFipsProbe, OPENSSL_KNOWN_VERSIONS, PolicyOutcome, ProcFipsProbe, ProviderError,
    ResolutionOutcome, Result, StaticHostProbe, VersionProbe,
};

/// Provider primitives.
pub mod primitives;

#[cfg(feature = "auto-init")]
mod auto_init;

/// Returns `true` if the provider set up at startup offers HKDF.
///
/// `false` before startup has completed.
#[must_use]
pub fn supports_hkdf() -> bool {
    readiness().is_some_and(|state| state.supports_hkdf)
}
