//! # vetguardian-contracts
//!
//! Shared record shapes, request types, and errors for the VetGuardian data
//! engine.
//!
//! All crates in the workspace import from here. No generation or ranking
//! logic lives in this crate, only data definitions and error types.
//! Records are immutable values that refer to one another by id string.

pub mod alert;
pub mod appointment;
pub mod auth;
pub mod care_plan;
pub mod error;
pub mod medication;
pub mod message;
pub mod prediction;
pub mod profile;
pub mod symptom;
pub mod veteran;
pub mod vitals;

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use alert::Severity;
    use appointment::{AppointmentRequest, AppointmentStatus};
    use care_plan::CarePlanUpdate;
    use error::VetGuardianError;
    use message::{MessagePriority, OutgoingMessage, SenderRole};
    use profile::VeteranProfile;
    use veteran::{RiskLevel, Veteran};
    use vitals::{VitalReading, VitalType, VitalValue};

    fn sample_veteran() -> Veteran {
        Veteran {
            id: "v-900".to_string(),
            name: "Alex Rivera".to_string(),
            age: 51,
            gender: "Female".to_string(),
            service_era: "Gulf War".to_string(),
            conditions: vec!["Tinnitus".to_string()],
            risk_level: RiskLevel::Low,
            last_checkin: Utc.with_ymd_and_hms(2023, 5, 12, 14, 30, 0).unwrap(),
            primary_provider: "Dr. Lisa Patel".to_string(),
        }
    }

    // ── VitalValue ───────────────────────────────────────────────────────────

    #[test]
    fn test_blood_pressure_serializes_as_slash_string() {
        let value = VitalValue::BloodPressure { systolic: 128, diastolic: 76 };
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"128/76\"");
        assert_eq!(value.to_string(), "128/76");
    }

    #[test]
    fn test_scalar_serializes_as_number() {
        let value = VitalValue::Scalar(98.6);
        assert_eq!(serde_json::to_string(&value).unwrap(), "98.6");
    }

    #[test]
    fn test_vital_value_parses_both_wire_shapes() {
        let bp: VitalValue = serde_json::from_str("\"141/90\"").unwrap();
        assert_eq!(bp, VitalValue::BloodPressure { systolic: 141, diastolic: 90 });

        let hr: VitalValue = serde_json::from_str("72").unwrap();
        assert_eq!(hr, VitalValue::Scalar(72.0));

        assert!(serde_json::from_str::<VitalValue>("\"not a pressure\"").is_err());
    }

    #[test]
    fn test_vital_value_shape_must_match_type() {
        let bp = VitalValue::BloodPressure { systolic: 120, diastolic: 80 };
        assert!(bp.matches(VitalType::BloodPressure));
        assert!(!bp.matches(VitalType::HeartRate));

        let scalar = VitalValue::Scalar(97.0);
        assert!(scalar.matches(VitalType::Oxygen));
        assert!(!scalar.matches(VitalType::BloodPressure));
    }

    #[test]
    fn test_vital_reading_uses_wire_field_names() {
        let reading = VitalReading {
            id: "hr-v-001-0-am".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap(),
            vital_type: VitalType::HeartRate,
            value: VitalValue::Scalar(71.0),
            unit: "bpm".to_string(),
            is_normal: true,
        };
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["type"], "heart_rate");
        assert_eq!(json["isNormal"], true);
        assert_eq!(json["value"], 71.0);
    }

    // ── Requests ─────────────────────────────────────────────────────────────

    #[test]
    fn test_appointment_request_schedules_with_given_id() {
        let request = AppointmentRequest {
            patient_id: "v-001".to_string(),
            title: "Diabetes Management".to_string(),
            provider_name: "Dr. Sarah Johnson".to_string(),
            department: "Endocrinology".to_string(),
            date_time: Utc.with_ymd_and_hms(2026, 11, 1, 15, 0, 0).unwrap(),
            duration: 45,
            is_virtual: false,
            notes: None,
        };
        let appointment = request.into_scheduled("appt-1");
        assert_eq!(appointment.id, "appt-1");
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(appointment.duration, 45);
    }

    #[test]
    fn test_outgoing_message_is_delivered_unread() {
        let outgoing = OutgoingMessage {
            sender: "James Wilson".to_string(),
            sender_role: SenderRole::Veteran,
            recipient: "Dr. Sarah Johnson".to_string(),
            subject: "Question".to_string(),
            content: "Can I take Metformin before bed?".to_string(),
            priority: MessagePriority::Normal,
        };
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        let message = outgoing.deliver("msg-1", at);
        assert!(!message.is_read);
        assert_eq!(message.timestamp, at);
    }

    #[test]
    fn test_care_plan_update_lists_only_set_fields() {
        let update = CarePlanUpdate {
            goals: Some("A1C under 7".to_string()),
            notes: Some("Revisit in 3 months".to_string()),
            ..Default::default()
        };
        assert_eq!(update.changed_fields(), vec!["goals", "notes"]);
        assert!(CarePlanUpdate::default().changed_fields().is_empty());
    }

    // ── Profiles ─────────────────────────────────────────────────────────────

    #[test]
    fn test_minimal_profile_json_fills_defaults() {
        let json = serde_json::json!({
            "veteran": serde_json::to_value(sample_veteran()).unwrap()
        });
        let profile: VeteranProfile = serde_json::from_value(json).unwrap();
        assert_eq!(profile.id(), "v-900");
        assert!(!profile.tracks_glucose);
        assert!(profile.medications.is_empty());
        assert!(profile.prediction.is_none());
        assert_eq!(profile.resolution, "Medication adjustment");
    }

    #[test]
    fn test_veteran_first_name() {
        assert_eq!(sample_veteran().first_name(), "Alex");
    }

    #[test]
    fn test_severity_rank_puts_high_first() {
        assert!(Severity::High.rank() < Severity::Medium.rank());
        assert!(Severity::Medium.rank() < Severity::Low.rank());
    }

    // ── VetGuardianError display messages ────────────────────────────────────

    #[test]
    fn test_error_simulated_display() {
        let err = VetGuardianError::Simulated;
        assert_eq!(err.to_string(), "Simulated API error. Please try again.");
        assert!(err.is_transient());
    }

    #[test]
    fn test_error_not_found_mentions_id() {
        let err = VetGuardianError::VeteranNotFound { id: "does-not-exist".to_string() };
        assert_eq!(err.to_string(), "Veteran with ID does-not-exist not found.");
        assert!(!err.is_transient());
    }

    #[test]
    fn test_error_invalid_credentials_display() {
        assert_eq!(VetGuardianError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_error_config_display() {
        let err = VetGuardianError::ConfigError { reason: "failure rate 1.5 outside [0, 1]".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("1.5"));
    }
}
