//! # fipsgate Core
//!
//! Chooses the cryptographic provider version at process startup, enforces
//! the requested FIPS policy on it, and offers run-time guards for code paths
//! that must never execute under enforced compliance.
//!
//! ## Startup
//!
//! ```text
//! env + host signal ──► resolver ──► provider.initialize ──► policy ──► readiness (fixed)
//!                                                                          │
//!                                       unreachable / unreachable_except_tests ◄┘
//! ```
//!
//! Any failure on the way is fatal: the process prints a diagnostic and
//! aborts. There is no degraded mode.
//!
//! ```rust,no_run
//! // Resolve, initialize and apply policy using AWS-LC and the default
//! // environment variables. Aborts on failure.
//! let state = fipsgate_core::init();
//! println!("provider {} ready, FIPS required: {}", state.version_text, state.fips_required);
//!
//! // Later, in a code path that must not run under compliance mode:
//! fipsgate_core::unreachable_except_tests();
//! ```
//!
//! ## Environment
//!
//! - `FIPSGATE_VERSION_OVERRIDE`: non-empty value pins the provider version.
//! - `FIPSGATE_FIPS`: `"0"` forces FIPS off, `"1"` forces it on, anything else
//!   keeps the provider default. When unset, a host that mandates FIPS
//!   (`/proc/sys/crypto/fips_enabled` is `1`) forces it on.
//!
//! Both names are configurable through [`GateConfig`].

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Error types for startup and guards.
pub mod error;
/// Process termination for unrecoverable conditions.
pub mod fatal;
/// Execution guards.
pub mod guard;
/// Host FIPS signal.
pub mod host;
/// FIPS policy enforcement.
pub mod policy;
/// The cryptographic provider boundary.
pub mod provider;
/// Write-once process readiness state.
pub mod readiness;
/// Provider version resolution.
pub mod resolver;
/// The single startup pass.
pub mod startup;

pub use error::{COMPONENT, CoreError, ProviderError, Result, TypeError};
pub use fipsgate_types::{
    CandidateVersion, FipsDirective, GateConfig, OPENSSL_KNOWN_VERSIONS, PolicyOutcome,
    ResolutionOutcome, VersionProbe,
};
pub use guard::{
    check_unreachable, check_unreachable_except_tests, executing_test, is_cargo_test_harness,
    is_test_executable, unreachable, unreachable_except_tests,
};
pub use host::{HostFipsProbe, ProcFipsProbe, StaticHostProbe};
pub use provider::{AwsLcProvider, CryptoProvider};
pub use readiness::{ReadinessState, is_enabled, readiness};
pub use startup::{StartupInputs, run_startup};

use fatal::terminate;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs the startup pass with [`AwsLcProvider`], the default configuration
/// and the kernel FIPS switch.
///
/// Only the first call in a process does any work; later calls return the
/// state that call produced.
///
/// # Aborts
///
/// Aborts the process if no provider version can be selected, the provider
/// fails to initialize, or the FIPS directive cannot be applied.
pub fn init() -> &'static ReadinessState {
    let config = GateConfig::default();
    let host = ProcFipsProbe::from_config(&config);
    init_with(&AwsLcProvider::new(), &config, &host)
}

/// Runs the startup pass with an explicit provider, configuration and host
/// probe.
///
/// Inputs are read inside the one-time initializer, so a second call never
/// re-reads the environment.
///
/// # Aborts
///
/// Aborts the process if `config` is invalid or the startup pass fails.
pub fn init_with(
    provider: &dyn CryptoProvider,
    config: &GateConfig,
    host: &dyn HostFipsProbe,
) -> &'static ReadinessState {
    readiness::install_with(|| {
        validate_or_terminate(config);
        let inputs = StartupInputs::from_env(config, host);
        startup_or_terminate(provider, &inputs, &config.test_suffixes)
    })
}

/// Runs the startup pass with already-gathered inputs.
///
/// Only the guard settings of `config` are used; the variable names are
/// still validated so that a bad configuration fails the same way as in
/// [`init_with`].
///
/// # Aborts
///
/// Aborts the process if `config` is invalid or the startup pass fails.
pub fn init_from_inputs(
    provider: &dyn CryptoProvider,
    inputs: &StartupInputs,
    config: &GateConfig,
) -> &'static ReadinessState {
    readiness::install_with(|| {
        validate_or_terminate(config);
        startup_or_terminate(provider, inputs, &config.test_suffixes)
    })
}

fn validate_or_terminate(config: &GateConfig) {
    if let Err(err) = config.validate() {
        terminate(&CoreError::Configuration(err));
    }
}

fn startup_or_terminate(
    provider: &dyn CryptoProvider,
    inputs: &StartupInputs,
    test_suffixes: &[String],
) -> ReadinessState {
    tracing::info!(directive = %inputs.directive(), "selecting cryptographic provider");
    match run_startup(provider, inputs, test_suffixes) {
        Ok(state) => state,
        Err(err) => terminate(&err),
    }
}
