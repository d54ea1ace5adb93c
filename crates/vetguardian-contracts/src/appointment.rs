//! Appointment records and scheduling requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Canceled,
    Rescheduled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Canceled => "canceled",
            AppointmentStatus::Rescheduled => "rescheduled",
        }
    }
}

/// A past or upcoming appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub provider_name: String,
    pub department: String,
    pub date_time: DateTime<Utc>,
    /// Length in minutes.
    pub duration: u32,
    pub is_virtual: bool,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An appointment to schedule. The API assigns the id and sets the status
/// to `Scheduled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    /// The veteran the appointment is for.
    pub patient_id: String,
    pub title: String,
    pub provider_name: String,
    pub department: String,
    pub date_time: DateTime<Utc>,
    pub duration: u32,
    pub is_virtual: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AppointmentRequest {
    /// Build the scheduled appointment this request describes.
    pub fn into_scheduled(self, id: impl Into<String>) -> Appointment {
        Appointment {
            id: id.into(),
            title: self.title,
            provider_name: self.provider_name,
            department: self.department,
            date_time: self.date_time,
            duration: self.duration,
            is_virtual: self.is_virtual,
            status: AppointmentStatus::Scheduled,
            notes: self.notes,
        }
    }
}

/// The clinician-side scheduling form, with date and time as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAppointmentRequest {
    pub patient_id: String,
    pub patient_name: String,
    /// Calendar date as entered, e.g. "2026-11-02".
    pub date: String,
    /// Time of day as entered, e.g. "14:30".
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub provider: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
