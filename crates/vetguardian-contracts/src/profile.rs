//! Declarative per-veteran profiles.
//!
//! A `VeteranProfile` carries everything the generators need to synthesize a
//! veteran's records: the roster entry itself plus templates for each
//! sub-resource. Generators read profiles; they never branch on veteran ids.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    alert::{AlertType, Severity},
    medication::Medication,
    prediction::{DataPoint, PredictionType},
    veteran::Veteran,
};

/// Placeholder replaced with the veteran's full name in alert descriptions.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// A symptom the veteran routinely reports.
///
/// Generated severity is `min_severity + floor(r * severity_span)` for a
/// uniform draw `r`, clamped to the valid range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomTemplate {
    pub symptom_type: String,
    pub min_severity: u8,
    pub severity_span: u8,
    pub description: String,
}

/// Content of one upcoming appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitTemplate {
    pub title: String,
    pub department: String,
    /// Length in minutes.
    pub duration: u32,
}

/// An open alert raised for the veteran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertTemplate {
    /// Suffix of the alert id: `alert-<veteran id>-<key>`.
    pub key: String,
    pub alert_type: AlertType,
    /// How long before generation time the alert fired.
    pub hours_ago: i64,
    pub title: String,
    /// May contain `{name}`.
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl AlertTemplate {
    /// The description with the placeholder filled in.
    pub fn render_description(&self, veteran_name: &str) -> String {
        self.description.replace(NAME_PLACEHOLDER, veteran_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionTemplate {
    pub prediction_type: PredictionType,
    pub confidence: f64,
    pub details: String,
    pub suggested_actions: Vec<String>,
    pub data_points: Vec<DataPoint>,
}

fn default_resolution() -> String {
    "Medication adjustment".to_string()
}

/// Everything known about one veteran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VeteranProfile {
    pub veteran: Veteran,
    /// Diabetic profiles also get twice-daily glucose readings.
    #[serde(default)]
    pub tracks_glucose: bool,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub symptoms: Vec<SymptomTemplate>,
    #[serde(default)]
    pub symptom_notes: String,
    /// Upcoming appointments, in the order they are scheduled.
    #[serde(default)]
    pub upcoming_visits: Vec<VisitTemplate>,
    #[serde(default)]
    pub alerts: Vec<AlertTemplate>,
    /// How the always-present resolved alert was resolved.
    #[serde(default = "default_resolution")]
    pub resolution: String,
    #[serde(default)]
    pub prediction: Option<PredictionTemplate>,
}

impl VeteranProfile {
    pub fn id(&self) -> &str {
        &self.veteran.id
    }
}
