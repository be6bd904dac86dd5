//! Version resolution.
//!
//! Decides which provider release line to initialize. The candidate slice is a
//! priority list: the first FIPS-capable entry wins and scanning stops there.
//! When no entry reports FIPS capability the first entry that merely exists is
//! used instead. That fallback does not distinguish "this line can never do
//! FIPS" from "FIPS support was not detected on this host"; both are treated
//! the same.

use fipsgate_types::{CandidateVersion, ResolutionOutcome, VersionProbe};

/// Resolves the provider version to initialize.
///
/// A present, non-empty `env_override` is returned verbatim without probing.
/// An invalid override surfaces later, when the provider fails to initialize
/// it.
pub fn resolve<F>(
    env_override: Option<&str>,
    candidates: &[CandidateVersion],
    mut probe: F,
) -> ResolutionOutcome
where
    F: FnMut(&CandidateVersion) -> VersionProbe,
{
    if let Some(version) = env_override.filter(|v| !v.is_empty()) {
        tracing::warn!(version, "provider version pinned by override, skipping version search");
        return ResolutionOutcome::overridden(CandidateVersion::new(version));
    }

    let mut fallback: Option<&CandidateVersion> = None;
    for candidate in candidates {
        let VersionProbe { exists, fips_capable } = probe(candidate);
        tracing::debug!(version = %candidate, exists, fips_capable, "probed provider version");

        if exists && fips_capable {
            return ResolutionOutcome { selected_version: Some(candidate.clone()), fallback_used: false };
        }
        if exists && fallback.is_none() {
            fallback = Some(candidate);
        }
    }

    match fallback {
        Some(version) => {
            tracing::warn!(version = %version, "no FIPS-capable provider version found, using fallback");
            ResolutionOutcome { selected_version: Some(version.clone()), fallback_used: true }
        }
        None => ResolutionOutcome::default(),
    }
}
