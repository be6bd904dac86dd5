//! # fipsgate Types
//!
//! Pure-Rust domain types for selecting a cryptographic provider version at
//! process startup and enforcing its FIPS policy.
//!
//! This crate has **zero FFI dependencies**. Everything that touches the
//! provider library itself (initialization, toggling FIPS mode, the
//! process-wide readiness record) lives in `fipsgate-core`.
//!
//! ## What's Here
//!
//! - **version**: `CandidateVersion`, `VersionProbe`, `ResolutionOutcome`
//! - **directive**: `FipsDirective`, `PolicyOutcome`
//! - **config**: `GateConfig` (environment variable names, test suffixes, host probe path)
//! - **error**: `TypeError`, `ProviderError`

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Configuration for the startup pass and the execution guards.
pub mod config;
/// FIPS directives and the result of applying them.
pub mod directive;
/// Error types for pure-Rust operations and the provider boundary.
pub mod error;
/// Candidate provider versions and resolution outcomes.
pub mod version;

pub use config::{
    DEFAULT_FIPS_MODE_VAR, DEFAULT_HOST_FIPS_PATH, DEFAULT_TEST_SUFFIXES,
    DEFAULT_VERSION_OVERRIDE_VAR, GateConfig,
};
pub use directive::{FipsDirective, PolicyOutcome};
pub use error::{ProviderError, Result, TypeError};
pub use version::{CandidateVersion, OPENSSL_KNOWN_VERSIONS, ResolutionOutcome, VersionProbe};
