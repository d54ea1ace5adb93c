//! Synthetic record generators.
//!
//! Each generator is a pure function of a veteran profile, the generation
//! instant `now`, and a `RandomSource`. Every call builds fresh records; none
//! of them can fail. The `*_for` helpers here resolve a veteran id against a
//! `Dataset` first and yield an empty list for unknown ids.

pub mod alerts;
pub mod appointments;
pub mod medications;
pub mod messages;
pub mod predictions;
pub mod symptoms;
pub mod vitals;

use chrono::{DateTime, Utc};
use vetguardian_contracts::{
    alert::Alert, appointment::Appointment, medication::Medication, message::Message,
    prediction::AvaPrediction, profile::VeteranProfile, symptom::SymptomReport,
    vitals::VitalReading,
};
use vetguardian_core::{Dataset, RandomSource};

fn with_profile<T>(
    dataset: &dyn Dataset,
    veteran_id: &str,
    generate: impl FnOnce(&VeteranProfile) -> Vec<T>,
) -> Vec<T> {
    dataset.profile(veteran_id).map(generate).unwrap_or_default()
}

pub fn vitals_for(
    dataset: &dyn Dataset,
    veteran_id: &str,
    now: DateTime<Utc>,
    rng: &dyn RandomSource,
) -> Vec<VitalReading> {
    with_profile(dataset, veteran_id, |p| vitals::generate(p, now, rng))
}

pub fn medications_for(dataset: &dyn Dataset, veteran_id: &str) -> Vec<Medication> {
    with_profile(dataset, veteran_id, medications::generate)
}

pub fn symptom_reports_for(
    dataset: &dyn Dataset,
    veteran_id: &str,
    now: DateTime<Utc>,
    rng: &dyn RandomSource,
) -> Vec<SymptomReport> {
    with_profile(dataset, veteran_id, |p| symptoms::generate(p, now, rng))
}

pub fn appointments_for(dataset: &dyn Dataset, veteran_id: &str, now: DateTime<Utc>) -> Vec<Appointment> {
    with_profile(dataset, veteran_id, |p| appointments::generate(p, now))
}

pub fn messages_for(dataset: &dyn Dataset, veteran_id: &str, now: DateTime<Utc>) -> Vec<Message> {
    with_profile(dataset, veteran_id, |p| messages::generate(p, now))
}

pub fn alerts_for(dataset: &dyn Dataset, veteran_id: &str, now: DateTime<Utc>) -> Vec<Alert> {
    with_profile(dataset, veteran_id, |p| alerts::generate(p, now))
}

/// Alerts for every veteran, concatenated in roster order.
pub fn all_alerts(dataset: &dyn Dataset, now: DateTime<Utc>) -> Vec<Alert> {
    dataset
        .profiles()
        .iter()
        .flat_map(|p| alerts::generate(p, now))
        .collect()
}

pub fn predictions_for(dataset: &dyn Dataset, veteran_id: &str, now: DateTime<Utc>) -> Vec<AvaPrediction> {
    with_profile(dataset, veteran_id, |p| predictions::generate(p, now))
}
