//! Completed and upcoming appointments.
//!
//! Three completed follow-ups every two weeks into the past, then one
//! scheduled visit per profile template every ten days into the future.

use chrono::{DateTime, Duration, Utc};
use vetguardian_contracts::{
    appointment::{Appointment, AppointmentStatus},
    profile::VeteranProfile,
};

const PAST_COUNT: i64 = 3;
const PAST_INTERVAL_DAYS: i64 = 14;
const FUTURE_INTERVAL_DAYS: i64 = 10;
const FOLLOW_UP_NOTE: &str = "Regular follow-up appointment, no significant changes.";

pub fn generate(profile: &VeteranProfile, now: DateTime<Utc>) -> Vec<Appointment> {
    let vid = profile.id();
    let provider = &profile.veteran.primary_provider;

    let past = (1..=PAST_COUNT).map(|i| Appointment {
        id: format!("appt-{}-past-{}", vid, i),
        title: format!("Follow-up Appointment {}", i),
        provider_name: provider.clone(),
        department: "Primary Care".to_string(),
        date_time: now - Duration::days(i * PAST_INTERVAL_DAYS),
        duration: 30,
        is_virtual: i % 2 == 0,
        status: AppointmentStatus::Completed,
        notes: Some(FOLLOW_UP_NOTE.to_string()),
    });

    let future = (1i64..).zip(&profile.upcoming_visits).map(|(i, visit)| Appointment {
        id: format!("appt-{}-future-{}", vid, i),
        title: visit.title.clone(),
        provider_name: provider.clone(),
        department: visit.department.clone(),
        date_time: now + Duration::days(i * FUTURE_INTERVAL_DAYS),
        duration: visit.duration,
        is_virtual: i % 2 == 0,
        status: AppointmentStatus::Scheduled,
        notes: None,
    });

    past.chain(future).collect()
}
