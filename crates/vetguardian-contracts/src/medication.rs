//! Medication records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A medication on a veteran's regimen.
///
/// `adherence_rate` is fixed per veteran/medication pairing and lies in
/// `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    /// Dose per administration, e.g. "500mg".
    pub dosage: String,
    /// Human-readable schedule, e.g. "twice daily".
    pub frequency: String,
    pub times_per_day: u32,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub instructions: String,
    pub is_active: bool,
    pub adherence_rate: f64,
}
