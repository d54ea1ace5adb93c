//! Journal entry and export types.
//!
//! `JournalEvent` is a single entry in the hash chain; it wraps a
//! `WriteRecord` with sequence numbering and the SHA-256 hashes that make
//! tampering detectable. `JournalExport` is a point-in-time copy of the chain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The write operations the mock API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOperation {
    AddVitalReading,
    UpdateMedicationAdherence,
    AddSymptomReport,
    ScheduleAppointment,
    ScheduleAppointmentDetailed,
    UpdateAppointmentStatus,
    SendMessage,
    MarkMessageAsRead,
    ResolveAlert,
    SynchronizeWithVista,
    CreateCarePlan,
    UpdateCarePlan,
}

/// What a caller asked the API to change.
///
/// The API acknowledges the write and records it here; it never applies it
/// to the data later reads return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteRecord {
    pub operation: WriteOperation,
    /// The record the write targets (new id for creates).
    pub target_id: String,
    /// The veteran the write concerns, when known.
    pub veteran_id: Option<String>,
    /// Operation-specific detail, e.g. the new status.
    pub detail: serde_json::Value,
    /// Wall-clock time the API accepted the write (UTC).
    pub accepted_at: DateTime<Utc>,
}

impl WriteRecord {
    pub fn new(operation: WriteOperation, target_id: impl Into<String>) -> Self {
        Self {
            operation,
            target_id: target_id.into(),
            veteran_id: None,
            detail: serde_json::Value::Null,
            accepted_at: Utc::now(),
        }
    }

    pub fn for_veteran(mut self, veteran_id: impl Into<String>) -> Self {
        self.veteran_id = Some(veteran_id.into());
        self
    }

    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.detail = detail;
        self
    }
}

/// A single entry in the journal's SHA-256 hash chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEvent {
    /// Position in the chain, starting at 0.
    pub sequence: u64,
    /// Random identifier for cross-referencing log lines.
    pub entry_id: Uuid,
    pub record: WriteRecord,
    /// `this_hash` of the previous event, or `GENESIS_HASH` for the first.
    pub prev_hash: String,
    /// SHA-256 (hex) over (entry_id, sequence, prev_hash, canonical record JSON).
    pub this_hash: String,
}

impl JournalEvent {
    /// The sentinel `prev_hash` used for the first event in every chain.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// A copy of the journal taken by `WriteJournal::export()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalExport {
    pub events: Vec<JournalEvent>,
    pub exported_at: DateTime<Utc>,
    /// `this_hash` of the last event; empty when nothing was written.
    pub terminal_hash: String,
}
