//! Clinician alerts: the profile's open alerts plus one resolved alert.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use vetguardian_contracts::{
    alert::{Alert, AlertType, Severity},
    profile::VeteranProfile,
};

const RESOLVED_DAYS_AGO: i64 = 5;
const RESOLUTION_DAYS_AGO: i64 = 3;

pub fn generate(profile: &VeteranProfile, now: DateTime<Utc>) -> Vec<Alert> {
    let vid = profile.id();
    let veteran = &profile.veteran;

    let mut alerts: Vec<Alert> = profile
        .alerts
        .iter()
        .map(|template| Alert {
            id: format!("alert-{}-{}", vid, template.key),
            veteran_id: vid.to_string(),
            timestamp: now - Duration::hours(template.hours_ago),
            alert_type: template.alert_type,
            title: template.title.clone(),
            description: template.render_description(&veteran.name),
            severity: template.severity,
            is_resolved: false,
            metadata: (!template.metadata.is_empty()).then(|| template.metadata.clone()),
        })
        .collect();

    let resolved_on = now - Duration::days(RESOLUTION_DAYS_AGO);
    let metadata = BTreeMap::from([
        (
            "resolvedDate".to_string(),
            resolved_on.to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
        ("resolvedBy".to_string(), veteran.primary_provider.clone()),
        ("resolution".to_string(), profile.resolution.clone()),
    ]);

    alerts.push(Alert {
        id: format!("alert-{}-resolved-1", vid),
        veteran_id: vid.to_string(),
        timestamp: now - Duration::days(RESOLVED_DAYS_AGO),
        alert_type: AlertType::VitalSign,
        title: "Abnormal Vital Sign".to_string(),
        description: format!(
            "{} had an abnormal vital sign reading that has since returned to normal range.",
            veteran.name
        ),
        severity: Severity::Medium,
        is_resolved: true,
        metadata: Some(metadata),
    });

    alerts
}
