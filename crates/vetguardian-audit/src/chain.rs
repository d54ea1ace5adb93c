//! SHA-256 linking of journal events.
//!
//! An event's hash covers, in order: the 16 raw bytes of its entry id, its
//! sequence number (8 bytes, little-endian), the previous event's hash as
//! ASCII hex, and the compact JSON encoding of its write record.

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::event::{JournalEvent, WriteRecord};

/// Lowercase hex SHA-256 for one journal event.
///
/// # Panics
///
/// Panics if `record` fails to serialize, which a `WriteRecord` cannot do.
pub fn hash_event(entry_id: &Uuid, sequence: u64, record: &WriteRecord, prev_hash: &str) -> String {
    let body = serde_json::to_vec(record).expect("WriteRecord serializes to JSON");
    let digest = Sha256::new()
        .chain_update(entry_id.as_bytes())
        .chain_update(sequence.to_le_bytes())
        .chain_update(prev_hash.as_bytes())
        .chain_update(body)
        .finalize();
    hex::encode(digest)
}

/// True when `events` form an unbroken chain from the genesis sentinel.
///
/// Sequence numbers must run 0, 1, 2, … and every stored hash must both
/// match a recomputation and be the next event's `prev_hash`. An empty
/// slice is a valid chain.
pub fn verify_chain(events: &[JournalEvent]) -> bool {
    events
        .iter()
        .zip(0u64..)
        .try_fold(JournalEvent::GENESIS_HASH, |prev, (event, expected_seq)| {
            let linked = event.sequence == expected_seq && event.prev_hash == prev;
            let intact = linked
                && event.this_hash
                    == hash_event(&event.entry_id, event.sequence, &event.record, &event.prev_hash);
            intact.then_some(event.this_hash.as_str())
        })
        .is_some()
}
