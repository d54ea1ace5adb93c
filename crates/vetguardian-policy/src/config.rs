//! Simulation policy schema.
//!
//! A `SimulationPolicy` is deserialized from TOML. Every section and field is
//! optional; anything omitted takes the default that mimics a slightly flaky
//! remote API (300–600 ms latency, 5% failures).
//!
//! Example:
//! ```toml
//! seed = 7
//!
//! [latency]
//! min_ms = 300
//! max_ms = 600
//!
//! [failure]
//! rate = 0.05
//! ```

use serde::{Deserialize, Serialize};

use vetguardian_contracts::error::{VetGuardianError, VetGuardianResult};

/// Uniform latency bounds in milliseconds. The draw lies in `[min_ms, max_ms)`,
/// or is exactly `min_ms` when the bounds are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self { min_ms: 300, max_ms: 600 }
    }
}

/// The single failure-injection knob, applied to every API operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FailureConfig {
    /// Probability in `[0, 1]` that a call fails with a simulated error.
    pub rate: f64,
}

impl Default for FailureConfig {
    fn default() -> Self {
        Self { rate: 0.05 }
    }
}

/// The top-level structure deserialized from a simulation policy file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationPolicy {
    pub latency: LatencyConfig,
    pub failure: FailureConfig,
    /// Seed for a reproducible random stream. Absent means thread-local
    /// randomness.
    pub seed: Option<u64>,
}

impl SimulationPolicy {
    /// No latency and no injected failures. Useful for tests and batch runs.
    pub fn instant() -> Self {
        Self {
            latency: LatencyConfig { min_ms: 0, max_ms: 0 },
            failure: FailureConfig { rate: 0.0 },
            seed: None,
        }
    }

    /// Replace the failure rate.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure.rate = rate;
        self
    }

    /// Replace the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check range invariants: `rate` in `[0, 1]` and `min_ms <= max_ms`.
    pub fn validate(&self) -> VetGuardianResult<()> {
        let rate = self.failure.rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(VetGuardianError::ConfigError {
                reason: format!("failure rate {} outside [0, 1]", rate),
            });
        }
        if self.latency.min_ms > self.latency.max_ms {
            return Err(VetGuardianError::ConfigError {
                reason: format!(
                    "latency min_ms {} exceeds max_ms {}",
                    self.latency.min_ms, self.latency.max_ms
                ),
            });
        }
        Ok(())
    }
}
