//! Care plans and EHR synchronization results.

use serde::{Deserialize, Serialize};

/// Numeric identifier assigned to a created care plan or detailed
/// appointment (milliseconds since the Unix epoch at creation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CarePlanId(pub i64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanInput {
    pub patient_id: String,
    pub patient_name: String,
    pub condition: String,
    pub goals: String,
    pub medications: String,
    pub notes: String,
}

/// A partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CarePlanUpdate {
    /// Names of the fields this update sets, in declaration order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("patientId", self.patient_id.is_some()),
            ("patientName", self.patient_name.is_some()),
            ("condition", self.condition.is_some()),
            ("goals", self.goals.is_some()),
            ("medications", self.medications.is_some()),
            ("notes", self.notes.is_some()),
        ];
        fields.iter().filter(|(_, set)| *set).map(|(name, _)| *name).collect()
    }
}

/// Outcome of pushing a veteran's data to the VistA EHR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOutcome {
    pub success: bool,
    pub message: String,
}
