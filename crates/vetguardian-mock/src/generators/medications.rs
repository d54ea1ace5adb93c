//! Medication regimens, taken verbatim from the profile.

use vetguardian_contracts::{medication::Medication, profile::VeteranProfile};

pub fn generate(profile: &VeteranProfile) -> Vec<Medication> {
    profile.medications.clone()
}
