//! Upcoming / past appointment partitioning.
//!
//! - upcoming: `date_time > now` and status `Scheduled`, soonest first
//! - past: `date_time < now` or status `Completed` / `Canceled`, most recent first
//!
//! The two views are not complements: a rescheduled appointment in the
//! future appears in neither.

use chrono::{DateTime, Utc};

use vetguardian_contracts::appointment::{Appointment, AppointmentStatus};

pub fn is_upcoming(appointment: &Appointment, now: DateTime<Utc>) -> bool {
    appointment.date_time > now && appointment.status == AppointmentStatus::Scheduled
}

pub fn is_past(appointment: &Appointment, now: DateTime<Utc>) -> bool {
    appointment.date_time < now
        || matches!(
            appointment.status,
            AppointmentStatus::Completed | AppointmentStatus::Canceled
        )
}

/// Upcoming appointments, ascending by `date_time`.
pub fn upcoming(appointments: &[Appointment], now: DateTime<Utc>) -> Vec<Appointment> {
    let mut out: Vec<Appointment> = appointments
        .iter()
        .filter(|a| is_upcoming(a, now))
        .cloned()
        .collect();
    out.sort_by(|a, b| a.date_time.cmp(&b.date_time));
    out
}

/// Past appointments, descending by `date_time`.
pub fn past(appointments: &[Appointment], now: DateTime<Utc>) -> Vec<Appointment> {
    let mut out: Vec<Appointment> = appointments
        .iter()
        .filter(|a| is_past(a, now))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date_time.cmp(&a.date_time));
    out
}

/// The soonest upcoming appointment, if any.
pub fn next_upcoming(appointments: &[Appointment], now: DateTime<Utc>) -> Option<Appointment> {
    appointments
        .iter()
        .filter(|a| is_upcoming(a, now))
        .min_by_key(|a| a.date_time)
        .cloned()
}
