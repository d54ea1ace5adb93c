//! Canned predictive insights.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionType {
    HealthDecline,
    MedicationIssue,
    AppointmentNeeded,
    MentalHealth,
}

/// A labelled value backing a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: String,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// A veteran-specific analytic narrative. `confidence` lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvaPrediction {
    pub id: String,
    pub veteran_id: String,
    pub timestamp: DateTime<Utc>,
    pub prediction_type: PredictionType,
    pub confidence: f64,
    pub details: String,
    pub suggested_actions: Vec<String>,
    pub data_points: Vec<DataPoint>,
}
