//! Error types for the VetGuardian data engine.
//!
//! Every fallible operation returns `VetGuardianResult<T>`. Messages are
//! human-readable and meant to be shown to the user as-is.

use thiserror::Error;

/// The unified error type for the mock API and its configuration.
#[derive(Debug, Error)]
pub enum VetGuardianError {
    /// Injected transient failure standing in for network flakiness.
    #[error("Simulated API error. Please try again.")]
    Simulated,

    /// A lookup by veteran id found no roster entry.
    #[error("Veteran with ID {id} not found.")]
    VeteranNotFound { id: String },

    /// The login username matched neither role pattern.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A simulation policy is missing, malformed, or out of range.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A roster document could not be parsed or violates roster invariants.
    #[error("roster error: {reason}")]
    RosterError { reason: String },
}

impl VetGuardianError {
    /// True for failures a caller may simply retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, VetGuardianError::Simulated)
    }
}

/// Convenience alias used throughout the VetGuardian crates.
pub type VetGuardianResult<T> = Result<T, VetGuardianError>;
