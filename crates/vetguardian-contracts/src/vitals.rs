//! Vital sign readings.
//!
//! `VitalValue` is a tagged variant: blood pressure carries a systolic /
//! diastolic pair, every other vital is a single number. On the wire the
//! pair is the familiar `"128/76"` string and scalars are plain numbers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The kind of vital sign a reading measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalType {
    BloodPressure,
    HeartRate,
    Temperature,
    Oxygen,
    Glucose,
    Weight,
}

impl VitalType {
    /// Every vital type, in dashboard display order.
    pub const ALL: [VitalType; 6] = [
        VitalType::BloodPressure,
        VitalType::HeartRate,
        VitalType::Temperature,
        VitalType::Oxygen,
        VitalType::Glucose,
        VitalType::Weight,
    ];

    /// The unit readings of this type are recorded in.
    pub fn unit(&self) -> &'static str {
        match self {
            VitalType::BloodPressure => "mmHg",
            VitalType::HeartRate => "bpm",
            VitalType::Temperature => "°F",
            VitalType::Oxygen => "%",
            VitalType::Glucose => "mg/dL",
            VitalType::Weight => "lbs",
        }
    }
}

/// The measured value of a vital reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VitalValue {
    BloodPressure { systolic: u32, diastolic: u32 },
    Scalar(f64),
}

impl VitalValue {
    /// The scalar value, or `None` for blood pressure.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            VitalValue::Scalar(v) => Some(*v),
            VitalValue::BloodPressure { .. } => None,
        }
    }

    /// True when the value's shape is the one `vital_type` requires.
    pub fn matches(&self, vital_type: VitalType) -> bool {
        match self {
            VitalValue::BloodPressure { .. } => vital_type == VitalType::BloodPressure,
            VitalValue::Scalar(_) => vital_type != VitalType::BloodPressure,
        }
    }
}

impl fmt::Display for VitalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VitalValue::BloodPressure { systolic, diastolic } => {
                write!(f, "{}/{}", systolic, diastolic)
            }
            VitalValue::Scalar(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for VitalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            VitalValue::BloodPressure { .. } => serializer.collect_str(self),
            VitalValue::Scalar(v) => serializer.serialize_f64(*v),
        }
    }
}

impl<'de> Deserialize<'de> for VitalValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(VitalValue::Scalar(v)),
            Raw::Text(text) => {
                let (sys, dia) = text
                    .split_once('/')
                    .ok_or_else(|| de::Error::custom(format!("expected 'sys/dia', got '{}'", text)))?;
                let systolic = sys.trim().parse().map_err(de::Error::custom)?;
                let diastolic = dia.trim().parse().map_err(de::Error::custom)?;
                Ok(VitalValue::BloodPressure { systolic, diastolic })
            }
        }
    }
}

/// A single vital sign reading.
///
/// `is_normal` is a label assigned when the reading is produced. It is not
/// derived from `value` against a clinical range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalReading {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub vital_type: VitalType,
    pub value: VitalValue,
    pub unit: String,
    pub is_normal: bool,
}

/// A reading submitted by a caller; the API assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVitalReading {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub vital_type: VitalType,
    pub value: VitalValue,
    pub unit: String,
    pub is_normal: bool,
}

impl NewVitalReading {
    /// Attach an id, producing a full reading.
    pub fn with_id(self, id: impl Into<String>) -> VitalReading {
        VitalReading {
            id: id.into(),
            timestamp: self.timestamp,
            vital_type: self.vital_type,
            value: self.value,
            unit: self.unit,
            is_normal: self.is_normal,
        }
    }
}
