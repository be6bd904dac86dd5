//! Shared `proptest` strategies for the fipsgate property tests.

#![deny(unsafe_code)]
#![deny(missing_docs)]

use fipsgate_types::{CandidateVersion, FipsDirective, OPENSSL_KNOWN_VERSIONS, VersionProbe};
use proptest::prelude::*;

/// Any probe answer.
pub fn arb_probe() -> impl Strategy<Value = VersionProbe> {
    prop_oneof![Just(VersionProbe::FIPS), Just(VersionProbe::PRESENT), Just(VersionProbe::ABSENT)]
}

/// Any directive.
pub fn arb_directive() -> impl Strategy<Value = FipsDirective> {
    prop_oneof![
        Just(FipsDirective::ForceDisable),
        Just(FipsDirective::ForceEnable),
        Just(FipsDirective::NoOverride),
    ]
}

/// The known version list, each entry paired with a random probe answer.
pub fn arb_known_probes() -> impl Strategy<Value = Vec<(CandidateVersion, VersionProbe)>> {
    proptest::collection::vec(arb_probe(), OPENSSL_KNOWN_VERSIONS.len()).prop_map(|probes| {
        OPENSSL_KNOWN_VERSIONS.iter().map(|id| CandidateVersion::new(*id)).zip(probes).collect()
    })
}

/// Values a user might put in the FIPS mode variable, weighted towards the
/// two recognized ones.
pub fn arb_fips_mode_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("0".to_string())),
        Just(Some("1".to_string())),
        "[ -~]{0,4}".prop_map(Some),
    ]
}
