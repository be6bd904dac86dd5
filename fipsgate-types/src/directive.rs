//! FIPS directives.
//!
//! The directive is what the operator (or the host) demands; the provider's
//! current state is what it happens to be running with. The policy enforcer in
//! `fipsgate-core` reconciles the two.

use std::fmt;

/// Environment value that forces FIPS mode off.
pub const FORCE_DISABLE_VALUE: &str = "0";
/// Environment value that forces FIPS mode on.
pub const FORCE_ENABLE_VALUE: &str = "1";

/// Requested FIPS state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FipsDirective {
    /// Turn FIPS mode off, aborting if the provider refuses.
    ForceDisable,
    /// Turn FIPS mode on, aborting if the provider refuses. Marks compliance
    /// as required for the rest of the process.
    ForceEnable,
    /// Keep whatever the provider was configured with.
    #[default]
    NoOverride,
}

impl FipsDirective {
    /// Derives the directive from the FIPS mode environment value and the host
    /// signal.
    ///
    /// An explicitly set variable always wins, even when its value is not
    /// recognized; `host` is only called when the variable is unset. The host
    /// can only force FIPS on.
    pub fn derive(env_value: Option<&str>, host: impl FnOnce() -> bool) -> Self {
        match env_value {
            Some(value) => Self::from_env_value(value),
            None if host() => Self::ForceEnable,
            None => Self::NoOverride,
        }
    }

    /// Maps a raw environment value to a directive.
    #[must_use]
    pub fn from_env_value(value: &str) -> Self {
        match value {
            FORCE_DISABLE_VALUE => Self::ForceDisable,
            FORCE_ENABLE_VALUE => Self::ForceEnable,
            _ => Self::NoOverride,
        }
    }

    /// Returns `true` if this directive marks compliance as required.
    #[must_use]
    pub fn requires_fips(&self) -> bool {
        matches!(self, Self::ForceEnable)
    }
}

impl fmt::Display for FipsDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForceDisable => f.write_str("force-disable"),
            Self::ForceEnable => f.write_str("force-enable"),
            Self::NoOverride => f.write_str("no-override"),
        }
    }
}

/// Outcome of applying a directive to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PolicyOutcome {
    /// Provider FIPS flag after the directive was applied.
    pub provider_fips_enabled: bool,
    /// Process-wide "FIPS required" flag consulted by the execution guards.
    pub fips_required: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_env_value_takes_priority_over_host() {
        let host_never_called = || -> bool { panic!("host probe must not run when the variable is set") };
        assert_eq!(FipsDirective::derive(Some("0"), host_never_called), FipsDirective::ForceDisable);
        assert_eq!(FipsDirective::derive(Some("1"), || false), FipsDirective::ForceEnable);
    }

    #[test]
    fn test_unrecognized_env_value_does_not_consult_host() {
        for value in ["", "yes", "true", "2", " 1", "01"] {
            let directive = FipsDirective::derive(Some(value), || panic!("host consulted for {value:?}"));
            assert_eq!(directive, FipsDirective::NoOverride, "value {value:?}");
        }
    }

    #[test]
    fn test_host_signal_only_forces_enable() {
        assert_eq!(FipsDirective::derive(None, || true), FipsDirective::ForceEnable);
        assert_eq!(FipsDirective::derive(None, || false), FipsDirective::NoOverride);
    }

    #[test]
    fn test_requires_fips_only_for_force_enable() {
        assert!(FipsDirective::ForceEnable.requires_fips());
        assert!(!FipsDirective::ForceDisable.requires_fips());
        assert!(!FipsDirective::NoOverride.requires_fips());
    }

    #[test]
    fn test_default_is_no_override() {
        assert_eq!(FipsDirective::default(), FipsDirective::NoOverride);
        assert_eq!(PolicyOutcome::default(), PolicyOutcome { provider_fips_enabled: false, fips_required: false });
    }
}
