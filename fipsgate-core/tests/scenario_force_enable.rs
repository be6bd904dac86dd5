#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    unused_qualifications
)]

//! FIPS forced on through the environment, with the host not mandating it.
//!
//! One test per file: the readiness state is process-wide and the variables
//! are set on the test process itself.

use fipsgate_core::provider::mock::{MockProvider, ProviderCall};
use fipsgate_core::{
    CoreError, FipsDirective, GateConfig, StaticHostProbe, VersionProbe,
    check_unreachable_except_tests, init_with, is_enabled, readiness,
};

const OVERRIDE_VAR: &str = "FIPSGATE_IT_A_VERSION_OVERRIDE";
const FIPS_VAR: &str = "FIPSGATE_IT_A_FIPS";

#[test]
fn test_env_force_enable_arms_guards() {
    std::env::set_var(FIPS_VAR, "1");
    std::env::remove_var(OVERRIDE_VAR);

    let config = GateConfig::new()
        .with_version_override_var(OVERRIDE_VAR)
        .with_fips_mode_var(FIPS_VAR);
    let provider = MockProvider::new("OpenSSL 3.0.7 1 Nov 2022")
        .with_version("3", VersionProbe::FIPS)
        .with_fips_enabled(false);

    assert!(!is_enabled());
    assert!(readiness().is_none());

    let state = init_with(&provider, &config, &StaticHostProbe(false));

    assert!(is_enabled());
    assert_eq!(state.directive, FipsDirective::ForceEnable);
    assert!(state.fips_required);
    assert!(state.fips_enabled);
    assert_eq!(state.selected_version.as_str(), "3");
    assert_eq!(provider.set_fips_calls(), vec![true]);
    assert!(std::ptr::eq(state, readiness().unwrap()));

    // The guards are armed: a production binary name is rejected.
    let err = check_unreachable_except_tests(is_enabled(), "/usr/bin/server", &state.test_suffixes)
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidExecutionContext { .. }));
    assert!(check_unreachable_except_tests(is_enabled(), "server.test", &state.test_suffixes).is_ok());

    // A second startup with different inputs observes the fixed state and
    // never touches the new provider.
    std::env::set_var(FIPS_VAR, "0");
    let other = MockProvider::new("other").with_version("1.1", VersionProbe::PRESENT);
    let again = init_with(&other, &config, &StaticHostProbe(false));
    assert!(std::ptr::eq(state, again));
    assert!(other.calls().is_empty());
    assert!(is_enabled());
    assert_eq!(
        provider.calls().iter().filter(|c| matches!(c, ProviderCall::Initialize(_))).count(),
        1
    );
}
