//! # vetguardian-audit
//!
//! Append-only, SHA-256 hash-chained journal of the writes the VetGuardian
//! mock API accepts.
//!
//! ## Overview
//!
//! The mock API acknowledges writes (new vitals, resolved alerts, scheduled
//! appointments, …) without applying them to later reads. Each accepted
//! write is recorded here instead, linked to the previous entry by its
//! SHA-256 hash so the trail can be checked with `verify_chain`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vetguardian_audit::{WriteJournal, WriteOperation, WriteRecord};
//!
//! let journal = WriteJournal::new();
//! journal.append(WriteRecord::new(WriteOperation::ResolveAlert, "alert-v-001-vital-1"));
//! assert!(journal.verify_integrity());
//! ```

pub mod chain;
pub mod event;
pub mod journal;

pub use chain::{hash_event, verify_chain};
pub use event::{JournalEvent, JournalExport, WriteOperation, WriteRecord};
pub use journal::WriteJournal;

// ── Tests ─────────────────────────────────────────────────────────────────────
