use thiserror::Error;

/// Result type alias for pure-Rust fipsgate operations.
pub type Result<T> = std::result::Result<T, TypeError>;

/// Errors raised by configuration validation and resolution bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TypeError {
    /// A configuration field failed validation.
    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Resolution finished without selecting any provider version.
    #[error("No candidate provider version found (probed: {probed})")]
    NoVersionSelected {
        /// Comma-separated list of the candidates that were probed.
        probed: String,
    },
}

/// Failure reported by the cryptographic provider itself.
///
/// The display form is the provider's own message, untouched, so that it can
/// be embedded in higher-level diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    /// Creates a provider error carrying the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Returns the provider's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for ProviderError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
