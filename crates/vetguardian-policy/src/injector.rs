//! Latency and failure injection driven by a `SimulationPolicy`.
//!
//! `FaultInjector` is the one place the mock API decides how long a call
//! takes and whether it fails. Every operation goes through it, reads and
//! writes alike, so a single rate governs the whole surface.

use std::{path::Path, time::Duration};

use tracing::{debug, warn};

use vetguardian_contracts::error::{VetGuardianError, VetGuardianResult};
use vetguardian_core::traits::RandomSource;

use crate::config::{LatencyConfig, SimulationPolicy};

/// Applies a validated `SimulationPolicy`.
///
/// ```rust,ignore
/// use vetguardian_policy::FaultInjector;
///
/// let injector = FaultInjector::from_file(Path::new("policies/simulation.toml"))?;
/// ```
#[derive(Debug, Clone)]
pub struct FaultInjector {
    policy: SimulationPolicy,
}

impl FaultInjector {
    /// Wrap `policy` after checking its invariants.
    ///
    /// Returns `VetGuardianError::ConfigError` if the policy is out of range.
    pub fn new(policy: SimulationPolicy) -> VetGuardianResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Parse `s` as TOML and build an injector.
    ///
    /// Returns `VetGuardianError::ConfigError` if the TOML is malformed or
    /// the resulting policy is out of range.
    pub fn from_toml_str(s: &str) -> VetGuardianResult<Self> {
        let policy: SimulationPolicy = toml::from_str(s).map_err(|e| VetGuardianError::ConfigError {
            reason: format!("failed to parse simulation policy TOML: {}", e),
        })?;
        Self::new(policy)
    }

    /// Read the file at `path` and parse it as a simulation policy.
    pub fn from_file(path: &Path) -> VetGuardianResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| VetGuardianError::ConfigError {
            reason: format!("failed to read simulation policy '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn policy(&self) -> &SimulationPolicy {
        &self.policy
    }

    /// Draw a latency uniformly from the configured bounds.
    pub fn latency(&self, rng: &dyn RandomSource) -> Duration {
        let LatencyConfig { min_ms, max_ms } = self.policy.latency;
        if max_ms == min_ms {
            return Duration::from_millis(min_ms);
        }
        let span = (max_ms - min_ms) as f64;
        let micros = (min_ms as f64 + rng.next_f64() * span) * 1000.0;
        Duration::from_micros(micros as u64)
    }

    /// Roll the failure dice once.
    pub fn should_fail(&self, rng: &dyn RandomSource) -> bool {
        rng.next_f64() < self.policy.failure.rate
    }

    /// Fail `operation` with `VetGuardianError::Simulated` if the roll says so.
    pub fn check(&self, operation: &str, rng: &dyn RandomSource) -> VetGuardianResult<()> {
        if self.should_fail(rng) {
            warn!(operation = %operation, rate = self.policy.failure.rate, "injected simulated API failure");
            return Err(VetGuardianError::Simulated);
        }
        debug!(operation = %operation, "failure roll passed");
        Ok(())
    }
}
