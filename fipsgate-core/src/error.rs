//! Error types for fipsgate startup and guard operations.
//!
//! Every variant is terminal: callers inside the startup pass hand the error
//! to [`crate::fatal::terminate`] rather than attempting recovery. Display
//! strings carry the component prefix, the attempted version or directive, and
//! the provider's own error text.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use thiserror::Error;

pub use fipsgate_types::error::{ProviderError, TypeError};

/// Component prefix for all diagnostics.
pub const COMPONENT: &str = "fipsgate";

/// Errors that can occur while selecting and configuring the provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// No candidate version exists on this host and no override was given.
    #[error("{component}: no provider version found (tried: {candidates})", component = COMPONENT)]
    NoCandidateVersionFound {
        /// Comma-separated list of the probed candidates.
        candidates: String,
    },

    /// The provider refused to initialize the selected version.
    #[error("{component}: can't initialize provider version {version}: {cause}", component = COMPONENT)]
    ProviderInitFailed {
        /// Version that was passed to `initialize`.
        version: String,
        /// Provider error.
        cause: ProviderError,
    },

    /// FIPS mode was required but could not be turned on.
    #[error("{component}: can't enable FIPS mode for {version_text}: {cause}", component = COMPONENT)]
    FipsEnableFailed {
        /// Provider version text.
        version_text: String,
        /// Provider error.
        cause: ProviderError,
    },

    /// FIPS mode was forced off but could not be turned off.
    #[error("{component}: can't disable FIPS mode for {version_text}: {cause}", component = COMPONENT)]
    FipsDisableFailed {
        /// Provider version text.
        version_text: String,
        /// Provider error.
        cause: ProviderError,
    },

    /// A guarded code path executed while FIPS mode is required.
    #[error("{component}: invalid code execution in {executable}", component = COMPONENT)]
    InvalidExecutionContext {
        /// Name the process was started with.
        executable: String,
    },

    /// The startup configuration is invalid.
    #[error("{component}: invalid configuration: {0}", component = COMPONENT)]
    Configuration(TypeError),
}

/// Routes resolution bookkeeping errors into the startup error space.
impl From<TypeError> for CoreError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::NoVersionSelected { probed } => {
                CoreError::NoCandidateVersionFound { candidates: probed }
            }
            other => CoreError::Configuration(other),
        }
    }
}

/// A specialized Result type for fipsgate core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
