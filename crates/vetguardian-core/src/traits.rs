//! Core trait definitions for the VetGuardian data engine.
//!
//! Two seams keep generation testable:
//!
//! - `Dataset`     : the read-only veteran roster the generators draw from
//! - `RandomSource`: every random draw, so tests can pin outcomes
//!
//! Both are injected into the generators and the mock API; neither is a
//! module-level singleton.

use vetguardian_contracts::{profile::VeteranProfile, veteran::Veteran};

/// A read-only collection of veteran profiles.
///
/// Implementations must keep profile ids unique. Lookups are by exact id.
pub trait Dataset: Send + Sync {
    /// Every profile, in roster order.
    fn profiles(&self) -> &[VeteranProfile];

    /// The profile for `veteran_id`, if the roster has one.
    fn profile(&self, veteran_id: &str) -> Option<&VeteranProfile> {
        self.profiles().iter().find(|p| p.id() == veteran_id)
    }

    /// Fresh copies of every roster entry, in roster order.
    fn veterans(&self) -> Vec<Veteran> {
        self.profiles().iter().map(|p| p.veteran.clone()).collect()
    }
}

/// A source of uniform draws in `[0, 1)`.
///
/// Everything stochastic in the engine (vital values, normal/abnormal
/// labels, symptom severities, latency, failure injection) goes through
/// this trait.
pub trait RandomSource: Send + Sync {
    /// Next uniform draw in `[0, 1)`.
    fn next_f64(&self) -> f64;

    /// Weighted coin flip: true when the draw exceeds `threshold`.
    ///
    /// `chance_above(0.2)` is true with probability 0.8.
    fn chance_above(&self, threshold: f64) -> bool {
        self.next_f64() > threshold
    }

    /// `floor(base + draw * span)`.
    fn floor_between(&self, base: f64, span: f64) -> u32 {
        (base + self.next_f64() * span).floor() as u32
    }
}
