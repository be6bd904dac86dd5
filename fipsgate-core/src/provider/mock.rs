//! Scripted provider for tests.
//!
//! Versions, the initial FIPS state and failures are configured up front;
//! every call is recorded so tests can assert on the exact interaction.

#![allow(clippy::expect_used)]

use std::collections::HashMap;
use std::sync::Mutex;

use fipsgate_types::{CandidateVersion, ProviderError, VersionProbe};

use super::{CryptoProvider, ProviderResult};

/// A call made against [`MockProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    /// `version_exists(version)`
    VersionExists(String),
    /// `initialize(version)`
    Initialize(String),
    /// `set_fips(enabled)`
    SetFips(bool),
}

#[derive(Debug, Default)]
struct MockState {
    fips_enabled: bool,
    calls: Vec<ProviderCall>,
}

/// In-memory provider with scripted behavior.
#[derive(Debug)]
pub struct MockProvider {
    version_text: String,
    versions: Vec<CandidateVersion>,
    probes: HashMap<CandidateVersion, VersionProbe>,
    init_error: Option<String>,
    set_fips_error: Option<String>,
    hkdf: bool,
    state: Mutex<MockState>,
}

impl MockProvider {
    /// Creates a provider with no installed versions and FIPS mode off.
    #[must_use]
    pub fn new(version_text: impl Into<String>) -> Self {
        Self {
            version_text: version_text.into(),
            versions: Vec::new(),
            probes: HashMap::new(),
            init_error: None,
            set_fips_error: None,
            hkdf: true,
            state: Mutex::new(MockState::default()),
        }
    }

    /// Appends a version to the priority list with the given probe answer.
    #[must_use]
    pub fn with_version(mut self, id: &str, probe: VersionProbe) -> Self {
        let version = CandidateVersion::new(id);
        self.versions.push(version.clone());
        self.probes.insert(version, probe);
        self
    }

    /// Sets the FIPS state the provider starts in.
    #[must_use]
    pub fn with_fips_enabled(self, enabled: bool) -> Self {
        self.lock().fips_enabled = enabled;
        self
    }

    /// Makes `initialize` fail with `message`.
    #[must_use]
    pub fn failing_initialize(mut self, message: &str) -> Self {
        self.init_error = Some(message.to_string());
        self
    }

    /// Makes `set_fips` fail with `message`.
    #[must_use]
    pub fn failing_set_fips(mut self, message: &str) -> Self {
        self.set_fips_error = Some(message.to_string());
        self
    }

    /// Sets the HKDF capability answer.
    #[must_use]
    pub fn with_hkdf(mut self, supported: bool) -> Self {
        self.hkdf = supported;
        self
    }

    /// Returns every call made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.lock().calls.clone()
    }

    /// Returns only the `set_fips` calls.
    #[must_use]
    pub fn set_fips_calls(&self) -> Vec<bool> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                ProviderCall::SetFips(enabled) => Some(*enabled),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("mock provider state poisoned")
    }
}

impl CryptoProvider for MockProvider {
    fn known_versions(&self) -> Vec<CandidateVersion> {
        self.versions.clone()
    }

    fn version_exists(&self, version: &CandidateVersion) -> VersionProbe {
        self.lock().calls.push(ProviderCall::VersionExists(version.to_string()));
        self.probes.get(version).copied().unwrap_or(VersionProbe::ABSENT)
    }

    fn initialize(&self, version: &CandidateVersion) -> ProviderResult<()> {
        self.lock().calls.push(ProviderCall::Initialize(version.to_string()));
        match &self.init_error {
            Some(message) => Err(ProviderError::new(message.clone())),
            None => Ok(()),
        }
    }

    fn is_fips_enabled(&self) -> bool {
        self.lock().fips_enabled
    }

    fn set_fips(&self, enabled: bool) -> ProviderResult<()> {
        let mut state = self.lock();
        state.calls.push(ProviderCall::SetFips(enabled));
        if let Some(message) = &self.set_fips_error {
            return Err(ProviderError::new(message.clone()));
        }
        state.fips_enabled = enabled;
        Ok(())
    }

    fn version_text(&self) -> String {
        self.version_text.clone()
    }

    fn supports_hkdf(&self) -> bool {
        self.hkdf
    }
}
