//! Alert triage ordering.
//!
//! Alerts sort by severity (high, then medium, then low) and, within a
//! severity, newest first. The comparison is a total order over
//! (severity, timestamp); alerts equal on both keep their input order.

use std::cmp::Ordering;

use vetguardian_contracts::alert::Alert;

/// Triage comparison: lower severity rank first, then later timestamp first.
pub fn compare_priority(a: &Alert, b: &Alert) -> Ordering {
    a.severity
        .rank()
        .cmp(&b.severity.rank())
        .then_with(|| b.timestamp.cmp(&a.timestamp))
}

/// Sort `alerts` in place into triage order. The sort is stable.
pub fn sort_by_priority(alerts: &mut [Alert]) {
    alerts.sort_by(compare_priority);
}

/// Alerts that have not been resolved, in input order.
pub fn unresolved(alerts: &[Alert]) -> Vec<Alert> {
    alerts.iter().filter(|a| !a.is_resolved).cloned().collect()
}

/// The `limit` most urgent unresolved alerts, in triage order.
pub fn top_unresolved(alerts: &[Alert], limit: usize) -> Vec<Alert> {
    let mut open = unresolved(alerts);
    sort_by_priority(&mut open);
    open.truncate(limit);
    open
}
