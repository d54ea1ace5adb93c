//! Self-reported symptom records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest severity a symptom can be rated.
pub const MIN_SEVERITY: u8 = 1;

/// Highest severity a symptom can be rated.
pub const MAX_SEVERITY: u8 = 5;

/// One symptom within a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symptom {
    /// Symptom name, e.g. "Fatigue".
    #[serde(rename = "type")]
    pub symptom_type: String,
    /// Rating in `[MIN_SEVERITY, MAX_SEVERITY]`.
    pub severity: u8,
    pub description: String,
}

/// A dated symptom report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomReport {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub symptoms: Vec<Symptom>,
    pub notes: String,
}

/// A report submitted by a caller; the API assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSymptomReport {
    pub timestamp: DateTime<Utc>,
    pub symptoms: Vec<Symptom>,
    pub notes: String,
}

impl NewSymptomReport {
    /// Attach an id, producing a full report.
    pub fn with_id(self, id: impl Into<String>) -> SymptomReport {
        SymptomReport {
            id: id.into(),
            timestamp: self.timestamp,
            symptoms: self.symptoms,
            notes: self.notes,
        }
    }
}
