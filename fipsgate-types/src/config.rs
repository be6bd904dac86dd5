//! Startup configuration.
//!
//! Names the environment variables the startup pass reads, where the host
//! FIPS signal lives, and which executable suffixes identify a test binary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};

/// Default name of the variable that pins the provider version.
pub const DEFAULT_VERSION_OVERRIDE_VAR: &str = "FIPSGATE_VERSION_OVERRIDE";

/// Default name of the variable that carries the FIPS directive.
pub const DEFAULT_FIPS_MODE_VAR: &str = "FIPSGATE_FIPS";

/// Default location of the Linux kernel FIPS switch.
pub const DEFAULT_HOST_FIPS_PATH: &str = "/proc/sys/crypto/fips_enabled";

/// Executable name suffixes that mark a test binary, in addition to Cargo's
/// own `deps/<name>-<hash>` harness layout, which is always recognized.
pub const DEFAULT_TEST_SUFFIXES: [&str; 4] = ["_test", ".test", "_test.exe", ".test.exe"];

/// Configuration for the startup pass and the execution guards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Environment variable that, when non-empty, names the provider version
    /// to initialize and bypasses the version search.
    pub version_override_var: String,
    /// Environment variable carrying the FIPS directive (`"0"` or `"1"`).
    pub fips_mode_var: String,
    /// File whose content `1` means the host mandates FIPS mode.
    pub host_fips_path: PathBuf,
    /// Executable suffixes that exempt a binary from
    /// `unreachable_except_tests`.
    pub test_suffixes: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            version_override_var: DEFAULT_VERSION_OVERRIDE_VAR.to_string(),
            fips_mode_var: DEFAULT_FIPS_MODE_VAR.to_string(),
            host_fips_path: PathBuf::from(DEFAULT_HOST_FIPS_PATH),
            test_suffixes: DEFAULT_TEST_SUFFIXES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl GateConfig {
    /// Creates a configuration with the default variable names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the version override variable name.
    #[must_use]
    pub fn with_version_override_var(mut self, name: impl Into<String>) -> Self {
        self.version_override_var = name.into();
        self
    }

    /// Sets the FIPS mode variable name.
    #[must_use]
    pub fn with_fips_mode_var(mut self, name: impl Into<String>) -> Self {
        self.fips_mode_var = name.into();
        self
    }

    /// Sets the host FIPS signal path.
    #[must_use]
    pub fn with_host_fips_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.host_fips_path = path.into();
        self
    }

    /// Replaces the test binary suffixes.
    #[must_use]
    pub fn with_test_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`TypeError::InvalidConfiguration`] if a variable name is empty
    /// or contains `=`, if both variables share a name, or if a test suffix is
    /// empty.
    pub fn validate(&self) -> Result<()> {
        validate_var_name("version_override_var", &self.version_override_var)?;
        validate_var_name("fips_mode_var", &self.fips_mode_var)?;

        if self.version_override_var == self.fips_mode_var {
            return Err(TypeError::InvalidConfiguration {
                field: "fips_mode_var",
                reason: format!(
                    "must differ from version_override_var ({})",
                    self.version_override_var
                ),
            });
        }

        if self.test_suffixes.iter().any(String::is_empty) {
            return Err(TypeError::InvalidConfiguration {
                field: "test_suffixes",
                reason: "suffixes must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn validate_var_name(field: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TypeError::InvalidConfiguration {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if name.contains('=') || name.contains('\0') {
        return Err(TypeError::InvalidConfiguration {
            field,
            reason: format!("{name:?} is not a valid environment variable name"),
        });
    }
    Ok(())
}
