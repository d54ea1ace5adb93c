//! The veteran roster.
//!
//! The standard roster is the five hand-authored veterans shipped in
//! `data/roster.json`. Tests and the demo can load any other roster document
//! with the same shape.

use std::{collections::HashSet, path::Path};

use tracing::debug;
use vetguardian_contracts::{
    error::{VetGuardianError, VetGuardianResult},
    profile::VeteranProfile,
    symptom::{MAX_SEVERITY, MIN_SEVERITY},
};
use vetguardian_core::Dataset;

const STANDARD_ROSTER: &str = include_str!("../data/roster.json");

/// An in-memory, read-only set of veteran profiles with unique ids.
#[derive(Debug, Clone)]
pub struct Roster {
    profiles: Vec<VeteranProfile>,
}

impl Roster {
    /// The standard five-veteran roster (v-001 .. v-005).
    pub fn standard() -> VetGuardianResult<Self> {
        Self::from_json_str(STANDARD_ROSTER)
    }

    /// Build a roster, rejecting duplicate or empty ids and out-of-range
    /// rates, confidences, or severities.
    pub fn from_profiles(profiles: Vec<VeteranProfile>) -> VetGuardianResult<Self> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if profile.id().trim().is_empty() {
                return Err(VetGuardianError::RosterError {
                    reason: format!("veteran '{}' has an empty id", profile.veteran.name),
                });
            }
            if !seen.insert(profile.id()) {
                return Err(VetGuardianError::RosterError {
                    reason: format!("duplicate veteran id '{}'", profile.id()),
                });
            }
            check_ranges(profile)?;
        }

        debug!(count = profiles.len(), "roster loaded");
        Ok(Self { profiles })
    }

    /// Parse a JSON array of profiles.
    pub fn from_json_str(json: &str) -> VetGuardianResult<Self> {
        let profiles: Vec<VeteranProfile> =
            serde_json::from_str(json).map_err(|e| VetGuardianError::RosterError {
                reason: format!("failed to parse roster JSON: {}", e),
            })?;
        Self::from_profiles(profiles)
    }

    /// Read and parse a roster document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> VetGuardianResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| VetGuardianError::RosterError {
            reason: format!("failed to read roster '{}': {}", path.display(), e),
        })?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn is_unit(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn check_ranges(profile: &VeteranProfile) -> VetGuardianResult<()> {
    let vid = profile.id();
    let out_of_range = |what: String| VetGuardianError::RosterError {
        reason: format!("veteran '{}': {}", vid, what),
    };

    if let Some(med) = profile.medications.iter().find(|m| !is_unit(m.adherence_rate)) {
        return Err(out_of_range(format!(
            "medication '{}' adherence rate {} outside [0, 1]",
            med.id, med.adherence_rate
        )));
    }
    if let Some(prediction) = profile.prediction.as_ref().filter(|p| !is_unit(p.confidence)) {
        return Err(out_of_range(format!(
            "prediction confidence {} outside [0, 1]",
            prediction.confidence
        )));
    }
    if let Some(symptom) = profile
        .symptoms
        .iter()
        .find(|s| !(MIN_SEVERITY..=MAX_SEVERITY).contains(&s.min_severity))
    {
        return Err(out_of_range(format!(
            "symptom '{}' minimum severity {} outside [{}, {}]",
            symptom.symptom_type, symptom.min_severity, MIN_SEVERITY, MAX_SEVERITY
        )));
    }
    Ok(())
}

impl Dataset for Roster {
    fn profiles(&self) -> &[VeteranProfile] {
        &self.profiles
    }
}
