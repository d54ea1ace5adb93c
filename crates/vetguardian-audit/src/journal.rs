//! In-memory write journal.
//!
//! `WriteJournal` keeps every accepted write in a `Vec` behind a `Mutex`, so
//! concurrent API calls can append safely. Reads in the mock API never
//! consult it: the journal is an observation log, not a backing store.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::{
    chain::{hash_event, verify_chain},
    event::{JournalEvent, JournalExport, WriteRecord},
};

struct JournalState {
    events: Vec<JournalEvent>,
    last_hash: String,
}

/// An append-only, hash-chained log of accepted writes.
pub struct WriteJournal {
    state: Mutex<JournalState>,
}

impl Default for WriteJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl WriteJournal {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(JournalState {
                events: Vec::new(),
                last_hash: JournalEvent::GENESIS_HASH.to_string(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, JournalState> {
        // Appends are all-or-nothing, so a poisoned chain is still consistent.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append `record` and return its sequence number.
    pub fn append(&self, record: WriteRecord) -> u64 {
        let mut state = self.lock();

        let sequence = state.events.len() as u64;
        let entry_id = Uuid::new_v4();
        let prev_hash = state.last_hash.clone();
        let this_hash = hash_event(&entry_id, sequence, &record, &prev_hash);

        info!(
            sequence,
            entry_id = %entry_id,
            operation = ?record.operation,
            target_id = %record.target_id,
            "write journaled"
        );

        state.events.push(JournalEvent {
            sequence,
            entry_id,
            record,
            prev_hash,
            this_hash: this_hash.clone(),
        });
        state.last_hash = this_hash;

        sequence
    }

    pub fn len(&self) -> usize {
        self.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every event written so far, in chain order.
    pub fn export(&self) -> JournalExport {
        let state = self.lock();
        JournalExport {
            events: state.events.clone(),
            exported_at: Utc::now(),
            terminal_hash: state.events.last().map(|e| e.this_hash.clone()).unwrap_or_default(),
        }
    }

    /// Hand over every event written so far and start a fresh chain from
    /// the genesis sentinel. Sequence numbers restart at 0.
    pub fn drain(&self) -> JournalExport {
        let mut state = self.lock();
        let events = std::mem::take(&mut state.events);
        let terminal_hash = std::mem::replace(
            &mut state.last_hash,
            JournalEvent::GENESIS_HASH.to_string(),
        );
        info!(drained = events.len(), "write journal drained");

        JournalExport {
            terminal_hash: if events.is_empty() { String::new() } else { terminal_hash },
            events,
            exported_at: Utc::now(),
        }
    }

    /// True when the in-memory chain has not been tampered with.
    pub fn verify_integrity(&self) -> bool {
        verify_chain(&self.lock().events)
    }

    #[cfg(test)]
    pub(crate) fn with_events_mut(&self, f: impl FnOnce(&mut Vec<JournalEvent>)) {
        f(&mut self.lock().events);
    }
}
