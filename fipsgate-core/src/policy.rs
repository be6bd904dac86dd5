//! FIPS policy enforcement.
//!
//! | directive    | provider on | action            |
//! |--------------|-------------|-------------------|
//! | ForceDisable | yes         | `set_fips(false)` |
//! | ForceDisable | no          | none              |
//! | ForceEnable  | no          | `set_fips(true)`  |
//! | ForceEnable  | yes         | none              |
//! | NoOverride   | either      | none              |
//!
//! Only `ForceEnable` marks FIPS as required. The guards only care about
//! compliance that was explicitly demanded, not about a provider that merely
//! happens to run in FIPS mode.

use fipsgate_types::{FipsDirective, PolicyOutcome};

use crate::error::{CoreError, Result};
use crate::provider::CryptoProvider;

/// Applies `directive` to `provider`.
///
/// # Errors
/// Returns [`CoreError::FipsDisableFailed`] or [`CoreError::FipsEnableFailed`]
/// when the provider refuses the transition. Both are fatal to the caller.
pub fn apply(directive: FipsDirective, provider: &dyn CryptoProvider) -> Result<PolicyOutcome> {
    let currently_enabled = provider.is_fips_enabled();
    tracing::debug!(%directive, currently_enabled, "applying FIPS directive");

    let provider_fips_enabled = match directive {
        FipsDirective::ForceDisable => {
            if currently_enabled {
                provider.set_fips(false).map_err(|cause| CoreError::FipsDisableFailed {
                    version_text: provider.version_text(),
                    cause,
                })?;
            }
            false
        }
        FipsDirective::ForceEnable => {
            if !currently_enabled {
                provider.set_fips(true).map_err(|cause| CoreError::FipsEnableFailed {
                    version_text: provider.version_text(),
                    cause,
                })?;
            }
            true
        }
        FipsDirective::NoOverride => currently_enabled,
    };

    Ok(PolicyOutcome { provider_fips_enabled, fips_required: directive.requires_fips() })
}
