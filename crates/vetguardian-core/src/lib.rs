//! # vetguardian-core
//!
//! Injection seams and derived-view rules for the VetGuardian data engine.
//!
//! This crate provides:
//! - The `Dataset` and `RandomSource` traits, plus stock random sources
//! - Alert triage ordering (`ranking`)
//! - Risk and severity tile counts (`buckets`)
//! - Case-insensitive field search (`search`)
//! - Upcoming / past appointment partitioning (`schedule`)
//! - Vital reading views for charts and the per-day log (`vitals`)
//! - Dashboard tile filters (`summary`)
//!
//! Everything here is a pure function of its inputs; "now" is always passed
//! in rather than read from the clock.

pub mod buckets;
pub mod random;
pub mod ranking;
pub mod schedule;
pub mod search;
pub mod summary;
pub mod traits;
pub mod vitals;

pub use random::{FixedRandom, ScriptedRandom, SeededRandom, ThreadRandom};
pub use traits::{Dataset, RandomSource};

// ── Tests ─────────────────────────────────────────────────────────────────────
