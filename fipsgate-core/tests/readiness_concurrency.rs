#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    unused_qualifications
)]

//! Concurrent startup runs the pass exactly once.

use fipsgate_core::provider::mock::{MockProvider, ProviderCall};
use fipsgate_core::{GateConfig, StartupInputs, VersionProbe, init_from_inputs, is_enabled, readiness};

#[test]
fn test_concurrent_init_runs_startup_once() {
    let provider = MockProvider::new("OpenSSL 1.1.1k FIPS 25 Mar 2021")
        .with_version("3", VersionProbe::ABSENT)
        .with_version("1.1", VersionProbe::FIPS)
        .with_fips_enabled(true);
    let config = GateConfig::default();
    let inputs = StartupInputs { version_override: None, fips_mode: Some("1".to_string()), host_fips: false };

    let states: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| init_from_inputs(&provider, &inputs, &config)))
            .collect();
        handles.into_iter().map(|h| h.join().expect("startup thread should complete")).collect()
    });

    let first = states[0];
    assert!(states.iter().all(|s| std::ptr::eq(*s, first)));
    assert_eq!(
        provider.calls().iter().filter(|c| matches!(c, ProviderCall::Initialize(_))).count(),
        1
    );
    // Already enabled: force-enable leaves the provider alone but still arms the guards.
    assert!(provider.set_fips_calls().is_empty());
    assert!(first.fips_required);
    assert!(is_enabled());

    // Readers on other threads see the same fixed record.
    let seen: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| readiness().map(|s| s.fips_required))).collect();
        handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect()
    });
    assert_eq!(seen, vec![true; 4]);
}
