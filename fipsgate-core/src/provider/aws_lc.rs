//! AWS-LC provider backed by `aws-lc-rs`.
//!
//! AWS-LC is linked statically, so exactly one release line is present in any
//! given build: the FIPS module when the `fips` feature is on, the standard
//! library otherwise. FIPS mode is a property of the linked module and cannot
//! be toggled at run time; `set_fips` succeeds only when it asks for the state
//! the module is already in.

use std::sync::OnceLock;

use fipsgate_types::{CandidateVersion, ProviderError, VersionProbe};

use super::{CryptoProvider, ProviderResult};

/// Release line of the AWS-LC FIPS module.
pub const AWS_LC_FIPS_LINE: &str = "aws-lc-fips";

/// Release line of the standard AWS-LC build.
pub const AWS_LC_LINE: &str = "aws-lc";

const LINKED_LINE: &str = if cfg!(feature = "fips") { AWS_LC_FIPS_LINE } else { AWS_LC_LINE };

/// Provider for the statically linked AWS-LC library.
#[derive(Debug, Default)]
pub struct AwsLcProvider {
    initialized: OnceLock<CandidateVersion>,
}

impl AwsLcProvider {
    /// Creates an uninitialized provider handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the line that was initialized, if any.
    #[must_use]
    pub fn initialized_line(&self) -> Option<&CandidateVersion> {
        self.initialized.get()
    }
}

impl CryptoProvider for AwsLcProvider {
    fn known_versions(&self) -> Vec<CandidateVersion> {
        CandidateVersion::list(&[AWS_LC_FIPS_LINE, AWS_LC_LINE])
    }

    fn version_exists(&self, version: &CandidateVersion) -> VersionProbe {
        match version.as_str() {
            AWS_LC_FIPS_LINE if LINKED_LINE == AWS_LC_FIPS_LINE => VersionProbe::FIPS,
            AWS_LC_LINE if LINKED_LINE == AWS_LC_LINE => VersionProbe::PRESENT,
            _ => VersionProbe::ABSENT,
        }
    }

    fn initialize(&self, version: &CandidateVersion) -> ProviderResult<()> {
        if version.as_str() != LINKED_LINE {
            return Err(ProviderError::new(format!(
                "release line {version} is not linked into this build (linked: {LINKED_LINE})"
            )));
        }

        // The first call into the library runs the module's power-on self tests.
        let fips_status = aws_lc_rs::try_fips_mode();
        if LINKED_LINE == AWS_LC_FIPS_LINE {
            fips_status.map_err(ProviderError::new)?;
        }

        if let Some(previous) = self.initialized.get() {
            if previous != version {
                return Err(ProviderError::new(format!(
                    "already initialized with release line {previous}"
                )));
            }
            return Ok(());
        }
        let _ = self.initialized.set(version.clone());
        Ok(())
    }

    fn is_fips_enabled(&self) -> bool {
        aws_lc_rs::try_fips_mode().is_ok()
    }

    fn set_fips(&self, enabled: bool) -> ProviderResult<()> {
        if enabled == self.is_fips_enabled() {
            return Ok(());
        }
        if enabled {
            Err(ProviderError::new("FIPS mode requires the AWS-LC FIPS module (`fips` feature)"))
        } else {
            Err(ProviderError::new("the AWS-LC FIPS module cannot leave FIPS mode"))
        }
    }

    fn version_text(&self) -> String {
        let module = if LINKED_LINE == AWS_LC_FIPS_LINE { "FIPS module" } else { "standard" };
        format!("AWS-LC ({module}, {LINKED_LINE})")
    }
}
