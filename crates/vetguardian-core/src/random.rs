//! `RandomSource` implementations.
//!
//! - `ThreadRandom`  : the thread-local generator; the production default
//! - `SeededRandom`  : reproducible `StdRng` stream for demos and tests
//! - `FixedRandom`   : every draw returns the same value
//! - `ScriptedRandom`: replays a fixed sequence, cycling when exhausted

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::traits::RandomSource;

/// Draws from `rand::thread_rng()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// A reproducible stream seeded from a `u64`.
///
/// The generator sits behind a `Mutex` so a single source can be shared by
/// concurrent API calls.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen::<f64>()
    }
}

/// Returns the same draw every time. Values are clamped into `[0, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(f64);

impl FixedRandom {
    pub fn new(value: f64) -> Self {
        Self(clamp_unit(value))
    }
}

impl RandomSource for FixedRandom {
    fn next_f64(&self) -> f64 {
        self.0
    }
}

/// Replays `values` in order, starting over after the last one.
///
/// An empty script behaves like `FixedRandom::new(0.0)`.
#[derive(Debug)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().map(clamp_unit).collect(),
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[idx]
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
