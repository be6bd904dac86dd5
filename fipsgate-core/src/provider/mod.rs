//! The cryptographic provider boundary.
//!
//! fipsgate does not implement any primitive itself. It drives a provider
//! through the narrow capability surface below: probe versions, initialize one,
//! read and toggle FIPS mode, and describe itself for diagnostics.
//!
//! ```text
//! CryptoProvider
//! ├── known_versions   fixed priority list, probed in order
//! ├── version_exists   (exists, fips_capable) per candidate
//! ├── initialize       called exactly once with the resolved version
//! ├── is_fips_enabled  current FIPS state
//! ├── set_fips         toggle, may fail
//! └── version_text     human-readable identity for error messages
//! ```

use fipsgate_types::{CandidateVersion, ProviderError, VersionProbe};

mod aws_lc;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use aws_lc::{AWS_LC_FIPS_LINE, AWS_LC_LINE, AwsLcProvider};

/// Result type for provider calls.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Capability surface of the external cryptographic provider.
///
/// # Thread Safety
///
/// The startup pass runs on one thread, but the provider is usually stored in
/// a `static` afterwards, so implementations must be `Send + Sync`.
pub trait CryptoProvider: Send + Sync {
    /// Returns the provider's release lines in priority order.
    fn known_versions(&self) -> Vec<CandidateVersion>;

    /// Reports whether `version` is installed and whether it can run in FIPS
    /// mode.
    fn version_exists(&self, version: &CandidateVersion) -> VersionProbe;

    /// Loads and initializes `version`.
    ///
    /// # Errors
    /// Returns the provider's error if the version cannot be loaded.
    fn initialize(&self, version: &CandidateVersion) -> ProviderResult<()>;

    /// Returns `true` if the provider currently runs in FIPS mode.
    fn is_fips_enabled(&self) -> bool;

    /// Turns FIPS mode on or off.
    ///
    /// # Errors
    /// Returns the provider's error if the transition is refused.
    fn set_fips(&self, enabled: bool) -> ProviderResult<()>;

    /// Human-readable provider identity, for example `OpenSSL 3.0.7 1 Nov 2022`.
    fn version_text(&self) -> String;

    /// Returns `true` if the initialized provider offers HKDF.
    fn supports_hkdf(&self) -> bool {
        true
    }
}
