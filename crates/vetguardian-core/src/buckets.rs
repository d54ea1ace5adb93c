//! Per-level counts for the dashboard summary tiles.

use vetguardian_contracts::{
    alert::{Alert, Severity},
    veteran::{RiskLevel, Veteran},
};

/// Counts per low/medium/high level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LevelCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl LevelCounts {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    fn add_risk(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }

    fn add_severity(&mut self, severity: Severity) {
        match severity {
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }
}

/// Veterans per risk level.
pub fn count_by_risk(veterans: &[Veteran]) -> LevelCounts {
    veterans.iter().fold(LevelCounts::default(), |mut counts, v| {
        counts.add_risk(v.risk_level);
        counts
    })
}

/// Alerts per severity, resolved or not.
pub fn count_by_severity(alerts: &[Alert]) -> LevelCounts {
    alerts.iter().fold(LevelCounts::default(), |mut counts, a| {
        counts.add_severity(a.severity);
        counts
    })
}

/// Unresolved alerts per severity.
pub fn count_unresolved_by_severity(alerts: &[Alert]) -> LevelCounts {
    alerts
        .iter()
        .filter(|a| !a.is_resolved)
        .fold(LevelCounts::default(), |mut counts, a| {
            counts.add_severity(a.severity);
            counts
        })
}
