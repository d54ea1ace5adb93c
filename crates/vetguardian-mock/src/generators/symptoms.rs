//! Periodic symptom reports.

use chrono::{DateTime, Duration, Utc};
use vetguardian_contracts::{
    profile::VeteranProfile,
    symptom::{Symptom, SymptomReport, MAX_SEVERITY, MIN_SEVERITY},
};
use vetguardian_core::RandomSource;

/// Reports per generation pass.
pub const REPORT_COUNT: i64 = 5;

/// Days between consecutive reports.
pub const REPORT_INTERVAL_DAYS: i64 = 3;

pub fn generate(profile: &VeteranProfile, now: DateTime<Utc>, rng: &dyn RandomSource) -> Vec<SymptomReport> {
    (0..REPORT_COUNT)
        .map(|i| SymptomReport {
            id: format!("sr-{}-{}", profile.id(), i),
            timestamp: now - Duration::days(i * REPORT_INTERVAL_DAYS),
            symptoms: profile
                .symptoms
                .iter()
                .map(|template| {
                    let severity = rng
                        .floor_between(template.min_severity as f64, template.severity_span as f64)
                        .clamp(MIN_SEVERITY as u32, MAX_SEVERITY as u32);
                    Symptom {
                        symptom_type: template.symptom_type.clone(),
                        severity: severity as u8,
                        description: template.description.clone(),
                    }
                })
                .collect(),
            notes: profile.symptom_notes.clone(),
        })
        .collect()
}
