//! Property-based tests for version resolution.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]

use fipsgate_core::resolver::resolve;
use fipsgate_core::{CandidateVersion, VersionProbe};
use fipsgate_tests::arb_known_probes;
use proptest::prelude::*;

fn lookup(table: &[(CandidateVersion, VersionProbe)], version: &CandidateVersion) -> VersionProbe {
    table.iter().find(|(v, _)| v == version).map(|(_, p)| *p).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A non-empty override is selected verbatim and nothing is probed.
    #[test]
    fn override_wins_without_probing(
        table in arb_known_probes(),
        pinned in "[0-9a-z.]{1,8}",
    ) {
        let candidates: Vec<_> = table.iter().map(|(v, _)| v.clone()).collect();
        let mut probed = 0usize;
        let outcome = resolve(Some(pinned.as_str()), &candidates, |_| {
            probed += 1;
            VersionProbe::FIPS
        });
        prop_assert_eq!(probed, 0);
        prop_assert_eq!(outcome.selected_version, Some(CandidateVersion::new(pinned)));
        prop_assert!(!outcome.fallback_used);
    }

    /// The first FIPS-capable candidate wins and nothing after it is probed.
    #[test]
    fn first_fips_capable_wins(table in arb_known_probes()) {
        let candidates: Vec<_> = table.iter().map(|(v, _)| v.clone()).collect();
        let mut probed = Vec::new();
        let outcome = resolve(None, &candidates, |v| {
            probed.push(v.clone());
            lookup(&table, v)
        });

        let first_fips = table.iter().position(|(_, p)| p.exists && p.fips_capable);
        let first_present = table.iter().position(|(_, p)| p.exists);

        match (first_fips, first_present) {
            (Some(i), _) => {
                prop_assert_eq!(outcome.selected_version.as_ref(), Some(&table[i].0));
                prop_assert!(!outcome.fallback_used);
                prop_assert_eq!(probed.len(), i + 1);
            }
            (None, Some(j)) => {
                prop_assert_eq!(outcome.selected_version.as_ref(), Some(&table[j].0));
                prop_assert!(outcome.fallback_used);
                prop_assert_eq!(probed.len(), table.len());
            }
            (None, None) => {
                prop_assert_eq!(outcome.selected_version, None);
                prop_assert!(!outcome.fallback_used);
            }
        }
    }

    /// Resolution is a pure function of the probe answers.
    #[test]
    fn resolution_is_deterministic(table in arb_known_probes()) {
        let candidates: Vec<_> = table.iter().map(|(v, _)| v.clone()).collect();
        let a = resolve(None, &candidates, |v| lookup(&table, v));
        let b = resolve(None, &candidates, |v| lookup(&table, v));
        prop_assert_eq!(a, b);
    }
}
