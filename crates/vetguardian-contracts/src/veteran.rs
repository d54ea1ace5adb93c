//! Veteran identity and acuity types.
//!
//! A `Veteran` is the patient-role user. Every other health record is keyed
//! by the veteran's `id` string; nothing holds a reference to a `Veteran`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Static, hand-assigned acuity classification of a veteran.
///
/// Never recomputed from live vitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Lowercase label as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// A monitored veteran as listed in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Veteran {
    /// Roster-unique identifier, e.g. "v-001".
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    /// Service era label (e.g. "Vietnam War", "OEF/OIF").
    pub service_era: String,
    /// Diagnosed conditions in display order.
    pub conditions: Vec<String>,
    pub risk_level: RiskLevel,
    /// Last time the veteran checked in (UTC).
    pub last_checkin: DateTime<Utc>,
    /// Display name of the veteran's primary provider.
    pub primary_provider: String,
}

impl Veteran {
    /// The first whitespace-separated token of `name`.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
