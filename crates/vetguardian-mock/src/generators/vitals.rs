//! Seven days of vital sign readings.
//!
//! Per UTC calendar day, newest day first:
//!
//! | slot  | readings                              |
//! |-------|---------------------------------------|
//! | 08:00 | glucose (glucose-tracking profiles)   |
//! | 09:00 | blood pressure, heart rate, [weight]  |
//! | 12:00 | temperature, oxygen                   |
//! | 18:00 | blood pressure, heart rate            |
//! | 19:00 | glucose (glucose-tracking profiles)   |
//!
//! Weight is taken once a week, on day 0.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use vetguardian_contracts::{
    profile::VeteranProfile,
    vitals::{VitalReading, VitalType, VitalValue},
};
use vetguardian_core::RandomSource;

/// Days covered by one generation pass.
pub const WINDOW_DAYS: i64 = 7;

// Probability of an abnormal label is the threshold itself.
const BLOOD_PRESSURE_THRESHOLD: f64 = 0.2;
const HEART_RATE_THRESHOLD: f64 = 0.2;
const TEMPERATURE_THRESHOLD: f64 = 0.1;
const OXYGEN_THRESHOLD: f64 = 0.15;
const GLUCOSE_THRESHOLD: f64 = 0.3;

pub fn generate(profile: &VeteranProfile, now: DateTime<Utc>, rng: &dyn RandomSource) -> Vec<VitalReading> {
    let vid = profile.id();
    let mut readings = Vec::new();

    for i in 0..WINDOW_DAYS {
        let day_start = (now - Duration::days(i))
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc();
        // Day 0 slots that have not happened yet are stamped at `now`.
        let at = |hour: i64| (day_start + Duration::hours(hour)).min(now);

        readings.push(blood_pressure(format!("bp-{}-{}-am", vid, i), at(9), rng));
        readings.push(blood_pressure(format!("bp-{}-{}-pm", vid, i), at(18), rng));
        readings.push(heart_rate(format!("hr-{}-{}-am", vid, i), at(9), rng));
        readings.push(heart_rate(format!("hr-{}-{}-pm", vid, i), at(18), rng));
        readings.push(temperature(format!("temp-{}-{}", vid, i), at(12), rng));
        readings.push(oxygen(format!("ox-{}-{}", vid, i), at(12), rng));

        if profile.tracks_glucose {
            readings.push(glucose(format!("gl-{}-{}-am", vid, i), at(8), rng));
            readings.push(glucose(format!("gl-{}-{}-pm", vid, i), at(19), rng));
        }

        if i % 7 == 0 {
            let value = VitalValue::Scalar(rng.floor_between(160.0, 40.0) as f64);
            readings.push(reading(format!("wt-{}-{}", vid, i), at(9), VitalType::Weight, value, true));
        }
    }

    readings
}

fn reading(
    id: String,
    timestamp: DateTime<Utc>,
    vital_type: VitalType,
    value: VitalValue,
    is_normal: bool,
) -> VitalReading {
    VitalReading {
        id,
        timestamp,
        vital_type,
        value,
        unit: vital_type.unit().to_string(),
        is_normal,
    }
}

fn blood_pressure(id: String, at: DateTime<Utc>, rng: &dyn RandomSource) -> VitalReading {
    let value = VitalValue::BloodPressure {
        systolic: rng.floor_between(120.0, 20.0),
        diastolic: rng.floor_between(70.0, 15.0),
    };
    let normal = rng.chance_above(BLOOD_PRESSURE_THRESHOLD);
    reading(id, at, VitalType::BloodPressure, value, normal)
}

fn heart_rate(id: String, at: DateTime<Utc>, rng: &dyn RandomSource) -> VitalReading {
    let value = VitalValue::Scalar(rng.floor_between(65.0, 20.0) as f64);
    let normal = rng.chance_above(HEART_RATE_THRESHOLD);
    reading(id, at, VitalType::HeartRate, value, normal)
}

fn temperature(id: String, at: DateTime<Utc>, rng: &dyn RandomSource) -> VitalReading {
    let raw = 97.0 + rng.next_f64() * 3.0;
    let value = VitalValue::Scalar((raw * 10.0).round() / 10.0);
    let normal = rng.chance_above(TEMPERATURE_THRESHOLD);
    reading(id, at, VitalType::Temperature, value, normal)
}

fn oxygen(id: String, at: DateTime<Utc>, rng: &dyn RandomSource) -> VitalReading {
    let value = VitalValue::Scalar(rng.floor_between(94.0, 6.0) as f64);
    let normal = rng.chance_above(OXYGEN_THRESHOLD);
    reading(id, at, VitalType::Oxygen, value, normal)
}

fn glucose(id: String, at: DateTime<Utc>, rng: &dyn RandomSource) -> VitalReading {
    let value = VitalValue::Scalar(rng.floor_between(100.0, 80.0) as f64);
    let normal = rng.chance_above(GLUCOSE_THRESHOLD);
    reading(id, at, VitalType::Glucose, value, normal)
}
