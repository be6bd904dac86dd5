//! Host FIPS signal.
//!
//! On Linux the kernel exposes the system-wide FIPS switch as
//! `/proc/sys/crypto/fips_enabled`, containing `1` when the host was booted
//! with `fips=1`. Other platforms report no mandate.

use std::path::{Path, PathBuf};

use fipsgate_types::{DEFAULT_HOST_FIPS_PATH, GateConfig};

/// Read-only query: does the host configuration mandate FIPS mode?
pub trait HostFipsProbe: Send + Sync {
    /// Returns `true` if the host requires FIPS mode.
    fn host_mandates_fips(&self) -> bool;
}

/// Probe that reads the kernel FIPS switch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcFipsProbe {
    path: PathBuf,
}

impl Default for ProcFipsProbe {
    fn default() -> Self {
        Self::new(DEFAULT_HOST_FIPS_PATH)
    }
}

impl ProcFipsProbe {
    /// Creates a probe reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a probe for the path named in `config`.
    #[must_use]
    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(config.host_fips_path.clone())
    }

    /// Returns the path this probe reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HostFipsProbe for ProcFipsProbe {
    #[cfg(target_os = "linux")]
    fn host_mandates_fips(&self) -> bool {
        match std::fs::read(&self.path) {
            Ok(content) => parse_fips_switch(&content),
            Err(err) => {
                tracing::debug!(path = %self.path.display(), error = %err, "host FIPS switch unreadable");
                false
            }
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn host_mandates_fips(&self) -> bool {
        false
    }
}

/// Fixed answer, for embedders that take the decision elsewhere and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticHostProbe(pub bool);

impl HostFipsProbe for StaticHostProbe {
    fn host_mandates_fips(&self) -> bool {
        self.0
    }
}

/// The switch file holds a single digit followed by a newline.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_fips_switch(content: &[u8]) -> bool {
    content.trim_ascii() == b"1"
}
