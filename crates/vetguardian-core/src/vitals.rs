//! Derived views over vital readings used by the vitals page and charts.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use vetguardian_contracts::vitals::{VitalReading, VitalType};

/// How far back a vitals view looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookback {
    Day,
    Week,
    Month,
    All,
}

impl Lookback {
    /// Earliest timestamp included, or `None` for `All`.
    pub fn since(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Lookback::Day => Some(now - Duration::days(1)),
            Lookback::Week => Some(now - Duration::days(7)),
            Lookback::Month => Some(now - Duration::days(30)),
            Lookback::All => None,
        }
    }
}

/// Readings at or after the lookback cutoff, in input order.
pub fn within(vitals: &[VitalReading], lookback: Lookback, now: DateTime<Utc>) -> Vec<VitalReading> {
    match lookback.since(now) {
        Some(cutoff) => vitals.iter().filter(|v| v.timestamp >= cutoff).cloned().collect(),
        None => vitals.to_vec(),
    }
}

/// The newest reading of each type present.
pub fn latest_by_type(vitals: &[VitalReading]) -> BTreeMap<VitalType, VitalReading> {
    let mut latest: BTreeMap<VitalType, VitalReading> = BTreeMap::new();
    for reading in vitals {
        let newer = latest
            .get(&reading.vital_type)
            .map_or(true, |current| reading.timestamp > current.timestamp);
        if newer {
            latest.insert(reading.vital_type, reading.clone());
        }
    }
    latest
}

/// Readings of one type, oldest first (chart series order).
pub fn series(vitals: &[VitalReading], vital_type: VitalType) -> Vec<VitalReading> {
    let mut out: Vec<VitalReading> = vitals
        .iter()
        .filter(|v| v.vital_type == vital_type)
        .cloned()
        .collect();
    out.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    out
}

/// Readings grouped by UTC calendar day; each day is newest first.
pub fn group_by_day(vitals: &[VitalReading]) -> BTreeMap<NaiveDate, Vec<VitalReading>> {
    let mut days: BTreeMap<NaiveDate, Vec<VitalReading>> = BTreeMap::new();
    for reading in vitals {
        days.entry(reading.timestamp.date_naive()).or_default().push(reading.clone());
    }
    for readings in days.values_mut() {
        readings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
    days
}

/// Fraction of readings of `vital_type` labelled normal, or `None` when
/// there are none.
pub fn normal_rate(vitals: &[VitalReading], vital_type: VitalType) -> Option<f64> {
    let (normal, total) = vitals
        .iter()
        .filter(|v| v.vital_type == vital_type)
        .fold((0usize, 0usize), |(n, t), v| (n + usize::from(v.is_normal), t + 1));
    (total > 0).then(|| normal as f64 / total as f64)
}
