//! Secure messages between veterans, clinicians, and the system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderRole {
    Veteran,
    Clinician,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessagePriority {
    Normal,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub sender_role: SenderRole,
    pub recipient: String,
    pub timestamp: DateTime<Utc>,
    pub subject: String,
    pub content: String,
    pub is_read: bool,
    pub priority: MessagePriority,
}

/// A message to send. The API assigns id and timestamp and marks it unread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    pub sender: String,
    pub sender_role: SenderRole,
    pub recipient: String,
    pub subject: String,
    pub content: String,
    pub priority: MessagePriority,
}

impl OutgoingMessage {
    /// Stamp the message as delivered at `timestamp`.
    pub fn deliver(self, id: impl Into<String>, timestamp: DateTime<Utc>) -> Message {
        Message {
            id: id.into(),
            sender: self.sender,
            sender_role: self.sender_role,
            recipient: self.recipient,
            timestamp,
            subject: self.subject,
            content: self.content,
            is_read: false,
            priority: self.priority,
        }
    }
}
