//! # vetguardian-policy
//!
//! A TOML-driven simulation policy for the VetGuardian mock API.
//!
//! ## Overview
//!
//! [`SimulationPolicy`] describes how the simulated network behaves: a
//! uniform latency window and one failure rate applied to every operation.
//! [`FaultInjector`] validates a policy and makes the per-call draws.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use vetguardian_policy::FaultInjector;
//!
//! let injector = FaultInjector::from_toml_str("[failure]\nrate = 0.1")?;
//! ```

pub mod config;
pub mod injector;

pub use config::{FailureConfig, LatencyConfig, SimulationPolicy};
pub use injector::FaultInjector;

// ── Tests ─────────────────────────────────────────────────────────────────────
