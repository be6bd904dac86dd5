//! Candidate provider versions.
//!
//! A provider publishes a fixed priority list of release lines. The list is
//! iterated in declared order and the first suitable entry wins, so the order
//! of the slice is part of the contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};

/// OpenSSL release lines in the order a libcrypto-backed provider should try
/// them: 3.x first, then the 1.1 spellings, then 1.0.x.
pub const OPENSSL_KNOWN_VERSIONS: [&str; 7] = ["3", "1.1", "11", "111", "1.0.2", "1.0.0", "10"];

/// Identifier of one provider release line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateVersion(String);

impl CandidateVersion {
    /// Creates a candidate from its identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds an ordered candidate list from string identifiers.
    #[must_use]
    pub fn list(ids: &[&str]) -> Vec<Self> {
        ids.iter().map(|id| Self::new(*id)).collect()
    }
}

impl fmt::Display for CandidateVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateVersion {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CandidateVersion {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Answer of a provider to "is this version present, and can it do FIPS?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionProbe {
    /// The version is installed on the host.
    pub exists: bool,
    /// The version reports FIPS capability.
    pub fips_capable: bool,
}

impl VersionProbe {
    /// Present and FIPS-capable.
    pub const FIPS: Self = Self { exists: true, fips_capable: true };
    /// Present without FIPS capability.
    pub const PRESENT: Self = Self { exists: true, fips_capable: false };
    /// Not installed.
    pub const ABSENT: Self = Self { exists: false, fips_capable: false };
}

/// Result of version resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolutionOutcome {
    /// The version to initialize, or `None` when no candidate exists at all.
    pub selected_version: Option<CandidateVersion>,
    /// True when no FIPS-capable candidate was found and the first merely
    /// existing one was chosen instead.
    pub fallback_used: bool,
}

impl ResolutionOutcome {
    /// Outcome for an operator-supplied override.
    #[must_use]
    pub fn overridden(version: CandidateVersion) -> Self {
        Self { selected_version: Some(version), fallback_used: false }
    }

    /// Returns the selected version.
    ///
    /// # Errors
    /// Returns [`TypeError::NoVersionSelected`] when nothing was selected.
    pub fn require_selected(&self, probed: &[CandidateVersion]) -> Result<&CandidateVersion> {
        self.selected_version.as_ref().ok_or_else(|| TypeError::NoVersionSelected {
            probed: probed.iter().map(CandidateVersion::as_str).collect::<Vec<_>>().join(", "),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_preserves_order() {
        let list = CandidateVersion::list(&OPENSSL_KNOWN_VERSIONS);
        let ids: Vec<&str> = list.iter().map(CandidateVersion::as_str).collect();
        assert_eq!(ids, OPENSSL_KNOWN_VERSIONS);
    }

    #[test]
    fn test_require_selected_reports_probed_candidates() {
        let probed = CandidateVersion::list(&["3", "1.1"]);
        let err = ResolutionOutcome::default().require_selected(&probed).unwrap_err();
        assert_eq!(err, TypeError::NoVersionSelected { probed: "3, 1.1".to_string() });
    }

    #[test]
    fn test_require_selected_returns_version() {
        let outcome = ResolutionOutcome::overridden("1.0.2".into());
        assert_eq!(outcome.require_selected(&[]).unwrap().as_str(), "1.0.2");
        assert!(!outcome.fallback_used);
    }

    #[test]
    fn test_candidate_serializes_as_plain_string() {
        let json = serde_json::to_string(&CandidateVersion::new("1.1")).unwrap();
        assert_eq!(json, "\"1.1\"");
    }
}
