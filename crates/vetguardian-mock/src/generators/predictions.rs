//! Canned AVA predictions.

use chrono::{DateTime, Utc};
use vetguardian_contracts::{prediction::AvaPrediction, profile::VeteranProfile};

/// Zero or one prediction, stamped at `now`.
pub fn generate(profile: &VeteranProfile, now: DateTime<Utc>) -> Vec<AvaPrediction> {
    profile
        .prediction
        .iter()
        .map(|template| AvaPrediction {
            id: format!("pred-{}-1", profile.id()),
            veteran_id: profile.id().to_string(),
            timestamp: now,
            prediction_type: template.prediction_type,
            confidence: template.confidence,
            details: template.details.clone(),
            suggested_actions: template.suggested_actions.clone(),
            data_points: template.data_points.clone(),
        })
        .collect()
}
