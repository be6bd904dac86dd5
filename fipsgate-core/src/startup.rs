//! The single startup pass.
//!
//! Inputs are gathered once from the environment and the host, then the pass
//! runs resolve → initialize → apply policy and produces the readiness record.
//! Nothing here touches process-wide state; installing the result is the job of
//! [`crate::readiness`].

use fipsgate_types::{FipsDirective, GateConfig};

use crate::error::{CoreError, Result};
use crate::host::HostFipsProbe;
use crate::policy;
use crate::provider::CryptoProvider;
use crate::readiness::ReadinessState;
use crate::resolver;

/// Everything the startup pass reads from outside the provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StartupInputs {
    /// Raw value of the version override variable, if set.
    pub version_override: Option<String>,
    /// Raw value of the FIPS mode variable, if set.
    pub fips_mode: Option<String>,
    /// Host FIPS signal. Only meaningful when `fips_mode` is `None`.
    pub host_fips: bool,
}

impl StartupInputs {
    /// Reads the configured environment variables and, only when the FIPS
    /// mode variable is unset, the host signal.
    ///
    /// Variables that are set but not valid Unicode are converted lossily. For
    /// the FIPS mode variable that means a set but unrecognized value. For the
    /// version override it means a version string containing `U+FFFD`, which
    /// the provider then fails to initialize, and the abort message shows the
    /// replacement characters rather than the original bytes.
    #[must_use]
    pub fn from_env(config: &GateConfig, host: &dyn HostFipsProbe) -> Self {
        let version_override = read_var(&config.version_override_var);
        let fips_mode = read_var(&config.fips_mode_var);
        let host_fips = fips_mode.is_none() && host.host_mandates_fips();
        Self { version_override, fips_mode, host_fips }
    }

    /// Returns the FIPS directive these inputs demand.
    #[must_use]
    pub fn directive(&self) -> FipsDirective {
        FipsDirective::derive(self.fips_mode.as_deref(), || self.host_fips)
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}

/// Runs the startup pass against `provider`.
///
/// `test_suffixes` is carried into the readiness record for the guards.
///
/// # Errors
/// - [`CoreError::NoCandidateVersionFound`] when nothing can be selected
/// - [`CoreError::ProviderInitFailed`] when the provider rejects the version
/// - [`CoreError::FipsEnableFailed`] / [`CoreError::FipsDisableFailed`] when
///   the directive cannot be applied
pub fn run_startup(
    provider: &dyn CryptoProvider,
    inputs: &StartupInputs,
    test_suffixes: &[String],
) -> Result<ReadinessState> {
    let candidates = provider.known_versions();
    let outcome = resolver::resolve(inputs.version_override.as_deref(), &candidates, |v| {
        provider.version_exists(v)
    });
    let version = outcome.require_selected(&candidates)?.clone();

    provider.initialize(&version).map_err(|cause| CoreError::ProviderInitFailed {
        version: version.to_string(),
        cause,
    })?;

    let directive = inputs.directive();
    let policy = policy::apply(directive, provider)?;

    let state = ReadinessState {
        selected_version: version,
        fallback_used: outcome.fallback_used,
        directive,
        fips_enabled: policy.provider_fips_enabled,
        fips_required: policy.fips_required,
        version_text: provider.version_text(),
        supports_hkdf: provider.supports_hkdf(),
        test_suffixes: test_suffixes.to_vec(),
    };

    tracing::info!(
        version = %state.selected_version,
        fallback = state.fallback_used,
        %directive,
        fips_enabled = state.fips_enabled,
        fips_required = state.fips_required,
        provider = %state.version_text,
        "cryptographic provider ready"
    );

    Ok(state)
}
