//! Small filters behind the veteran dashboard tiles.

use vetguardian_contracts::{medication::Medication, message::Message};

pub fn unread_messages(messages: &[Message]) -> Vec<Message> {
    messages.iter().filter(|m| !m.is_read).cloned().collect()
}

pub fn active_medications(medications: &[Medication]) -> Vec<Medication> {
    medications.iter().filter(|m| m.is_active).cloned().collect()
}

/// Mean adherence across active medications, or `None` if none are active.
pub fn mean_adherence(medications: &[Medication]) -> Option<f64> {
    let active: Vec<f64> = medications
        .iter()
        .filter(|m| m.is_active)
        .map(|m| m.adherence_rate)
        .collect();
    if active.is_empty() {
        return None;
    }
    Some(active.iter().sum::<f64>() / active.len() as f64)
}
