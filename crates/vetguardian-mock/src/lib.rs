//! # vetguardian-mock
//!
//! Synthetic veteran health data and the simulated API that serves it.
//!
//! ## Overview
//!
//! - [`roster`]: the read-only veteran roster (five standard profiles, or
//!   any JSON document of the same shape)
//! - [`generators`]: pure functions that synthesize vitals, medications,
//!   symptom reports, appointments, messages, alerts, and predictions for a
//!   profile
//! - [`api`]: [`MockApi`], an async facade adding simulated latency, failure
//!   injection, and id assignment for writes
//!
//! Nothing here is persisted. Writes are acknowledged, journaled, and
//! forgotten; every read regenerates from the roster.

pub mod api;
pub mod generators;
pub mod roster;

pub use api::MockApi;
pub use roster::Roster;

/// The shipped default simulation policy.
pub const DEFAULT_POLICY_TOML: &str = include_str!("../policies/simulation.toml");

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc, time::Duration as StdDuration};

    use chrono::{DateTime, Duration, TimeZone, Utc};
    use vetguardian_contracts::{
        alert::{AlertType, Severity},
        appointment::{AppointmentRequest, AppointmentStatus},
        auth::{Credentials, UserRole},
        error::VetGuardianError,
        message::{MessagePriority, SenderRole},
        profile::VeteranProfile,
        vitals::{VitalType, VitalValue},
    };
    use vetguardian_core::{
        ranking::top_unresolved, schedule, Dataset, FixedRandom, RandomSource, SeededRandom,
    };
    use vetguardian_policy::{FaultInjector, SimulationPolicy};

    use super::{generators, MockApi, Roster, DEFAULT_POLICY_TOML};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn roster() -> Roster {
        Roster::standard().expect("standard roster must parse")
    }

    fn profile(id: &str) -> VeteranProfile {
        roster().profile(id).cloned().expect("profile must exist")
    }

    /// Mid-morning, so the 12:00 and later slots of day 0 are in the future.
    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 10, 30, 0).unwrap()
    }

    fn instant_api() -> MockApi {
        MockApi::standard(SimulationPolicy::instant()).expect("standard api")
    }

    fn appointment_request() -> AppointmentRequest {
        AppointmentRequest {
            patient_id: "v-001".to_string(),
            title: "Diabetes Education".to_string(),
            provider_name: "Dr. Sarah Johnson".to_string(),
            department: "Endocrinology".to_string(),
            date_time: Utc::now() + Duration::days(3),
            duration: 30,
            is_virtual: true,
            notes: None,
        }
    }

    // ── Roster ────────────────────────────────────────────────────────────────

    #[test]
    fn test_standard_roster_has_five_unique_veterans() {
        let roster = roster();
        assert_eq!(roster.len(), 5);
        let ids: HashSet<&str> = roster.profiles().iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), 5);
        assert!(ids.contains("v-001") && ids.contains("v-005"));
    }

    #[test]
    fn test_only_v001_tracks_glucose() {
        let roster = roster();
        let tracking: Vec<&str> = roster
            .profiles()
            .iter()
            .filter(|p| p.tracks_glucose)
            .map(|p| p.id())
            .collect();
        assert_eq!(tracking, vec!["v-001"]);
    }

    #[test]
    fn test_duplicate_roster_ids_rejected() {
        let p = profile("v-002");
        let err = Roster::from_profiles(vec![p.clone(), p]).unwrap_err();
        assert!(matches!(err, VetGuardianError::RosterError { .. }));
        assert!(err.to_string().contains("v-002"));
    }

    #[test]
    fn test_bad_roster_json_rejected() {
        let err = Roster::from_json_str("[{\"veteran\": 7}]").unwrap_err();
        assert!(matches!(err, VetGuardianError::RosterError { .. }));
    }

    #[test]
    fn test_out_of_range_adherence_rejected() {
        let mut p = profile("v-001");
        p.medications[0].adherence_rate = 1.7;
        let err = Roster::from_profiles(vec![p]).unwrap_err();
        assert!(matches!(err, VetGuardianError::RosterError { .. }));
        assert!(err.to_string().contains("med-001"));
    }

    #[test]
    fn test_out_of_range_confidence_rejected() {
        let mut p = profile("v-004");
        if let Some(prediction) = p.prediction.as_mut() {
            prediction.confidence = 3.5;
        }
        let err = Roster::from_profiles(vec![p]).unwrap_err();
        assert!(err.to_string().contains("confidence"));
    }

    #[test]
    fn test_out_of_range_symptom_severity_rejected() {
        let mut p = profile("v-003");
        p.symptoms[1].min_severity = 0;
        let err = Roster::from_profiles(vec![p]).unwrap_err();
        assert!(err.to_string().contains("Anxiety"));
    }

    #[test]
    fn test_out_of_range_json_fixture_rejected() {
        let mut value = serde_json::to_value(vec![profile("v-002")]).unwrap();
        value[0]["medications"][0]["adherenceRate"] = serde_json::json!(1.7);
        let err = Roster::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, VetGuardianError::RosterError { .. }));
    }

    #[test]
    fn test_missing_roster_file_is_roster_error() {
        let err = Roster::from_file("/nonexistent/roster.json").unwrap_err();
        assert!(err.to_string().contains("failed to read roster"));
    }

    // ── Vitals ────────────────────────────────────────────────────────────────

    #[test]
    fn test_vital_counts_per_profile() {
        let rng = SeededRandom::new(7);
        let now = fixed_now();
        let roster = roster();

        // 7 days x (2 BP + 2 HR + temp + O2) + 1 weight, plus 14 glucose for v-001.
        assert_eq!(generators::vitals_for(&roster, "v-001", now, &rng).len(), 57);
        for id in ["v-002", "v-003", "v-004", "v-005"] {
            assert_eq!(generators::vitals_for(&roster, id, now, &rng).len(), 43, "{}", id);
        }
    }

    #[test]
    fn test_vitals_lie_within_window() {
        let now = fixed_now();
        let vitals = generators::vitals::generate(&profile("v-001"), now, &SeededRandom::new(1));
        let start = now - Duration::days(generators::vitals::WINDOW_DAYS);
        assert!(vitals.iter().all(|v| v.timestamp >= start && v.timestamp <= now));

        let pm = vitals.iter().find(|v| v.id == "bp-v-001-0-pm").unwrap();
        assert_eq!(pm.timestamp, now, "future slot on day 0 is clamped to now");
        let am = vitals.iter().find(|v| v.id == "bp-v-001-1-am").unwrap();
        assert_eq!(am.timestamp, Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_vital_value_shapes_and_units() {
        let vitals = generators::vitals::generate(&profile("v-001"), fixed_now(), &SeededRandom::new(3));
        for v in &vitals {
            assert!(v.value.matches(v.vital_type), "{} has wrong value shape", v.id);
            assert_eq!(v.unit, v.vital_type.unit());
        }
        let weights: Vec<_> = vitals.iter().filter(|v| v.vital_type == VitalType::Weight).collect();
        assert_eq!(weights.len(), 1);
        assert_eq!(weights[0].id, "wt-v-001-0");
        assert!(weights[0].is_normal);
    }

    #[test]
    fn test_vital_value_ranges_at_extremes() {
        let low = generators::vitals::generate(&profile("v-001"), fixed_now(), &FixedRandom::new(0.0));
        let bp = low.iter().find(|v| v.vital_type == VitalType::BloodPressure).unwrap();
        assert_eq!(bp.value, VitalValue::BloodPressure { systolic: 120, diastolic: 70 });
        // A zero draw never clears a threshold, so only weight stays normal.
        assert!(low.iter().all(|v| v.is_normal == (v.vital_type == VitalType::Weight)));

        let high = generators::vitals::generate(&profile("v-001"), fixed_now(), &FixedRandom::new(0.999));
        for v in &high {
            assert!(v.is_normal);
            match (v.vital_type, v.value) {
                (VitalType::BloodPressure, VitalValue::BloodPressure { systolic, diastolic }) => {
                    assert_eq!((systolic, diastolic), (139, 84));
                }
                (VitalType::HeartRate, VitalValue::Scalar(x)) => assert_eq!(x, 84.0),
                (VitalType::Temperature, VitalValue::Scalar(x)) => assert_eq!(x, 100.0),
                (VitalType::Oxygen, VitalValue::Scalar(x)) => assert_eq!(x, 99.0),
                (VitalType::Glucose, VitalValue::Scalar(x)) => assert_eq!(x, 179.0),
                (VitalType::Weight, VitalValue::Scalar(x)) => assert_eq!(x, 199.0),
                other => panic!("unexpected reading {:?}", other),
            }
        }
    }

    #[test]
    fn test_normal_rates_track_thresholds() {
        let rng = SeededRandom::new(2024);
        let p = profile("v-001");
        let mut totals = std::collections::HashMap::<VitalType, (u32, u32)>::new();

        for _ in 0..200 {
            for v in generators::vitals::generate(&p, fixed_now(), &rng) {
                let entry = totals.entry(v.vital_type).or_default();
                entry.0 += 1;
                entry.1 += v.is_normal as u32;
            }
        }

        for (vital_type, expected) in [
            (VitalType::BloodPressure, 0.8),
            (VitalType::HeartRate, 0.8),
            (VitalType::Temperature, 0.9),
            (VitalType::Oxygen, 0.85),
            (VitalType::Glucose, 0.7),
        ] {
            let (count, normal) = totals[&vital_type];
            assert!(count >= 1000, "{:?}: only {} readings", vital_type, count);
            let rate = normal as f64 / count as f64;
            assert!((rate - expected).abs() < 0.05, "{:?} normal rate {}", vital_type, rate);
        }
    }

    #[test]
    fn test_unknown_veteran_yields_empty_lists() {
        let roster = roster();
        let rng = SeededRandom::new(0);
        let now = fixed_now();
        assert!(generators::vitals_for(&roster, "v-999", now, &rng).is_empty());
        assert!(generators::medications_for(&roster, "v-999").is_empty());
        assert!(generators::symptom_reports_for(&roster, "v-999", now, &rng).is_empty());
        assert!(generators::appointments_for(&roster, "v-999", now).is_empty());
        assert!(generators::messages_for(&roster, "v-999", now).is_empty());
        assert!(generators::alerts_for(&roster, "v-999", now).is_empty());
        assert!(generators::predictions_for(&roster, "v-999", now).is_empty());
    }

    // ── Other generators ──────────────────────────────────────────────────────

    #[test]
    fn test_medications_are_profile_verbatim() {
        let meds = generators::medications::generate(&profile("v-002"));
        let names: Vec<&str> = meds.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Duloxetine", "Cyclobenzaprine", "Ibuprofen"]);
        assert_eq!(meds[1].adherence_rate, 0.65);
    }

    #[test]
    fn test_symptom_reports_every_three_days() {
        let now = fixed_now();
        let reports = generators::symptoms::generate(&profile("v-002"), now, &FixedRandom::new(0.999));
        assert_eq!(reports.len(), 5);
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.id, format!("sr-v-002-{}", i));
            assert_eq!(report.timestamp, now - Duration::days(3 * i as i64));
            assert_eq!(report.notes, "Pain medication provides temporary relief");
        }
        // Back pain draws from [3, 6) and is capped at 5.
        assert_eq!(reports[0].symptoms[0].severity, 5);

        let low = generators::symptoms::generate(&profile("v-005"), now, &FixedRandom::new(0.0));
        assert!(low.iter().flat_map(|r| &r.symptoms).all(|s| s.severity == 2));
    }

    #[test]
    fn test_appointment_layout() {
        let now = fixed_now();
        let appts = generators::appointments::generate(&profile("v-002"), now);
        let ids: Vec<&str> = appts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "appt-v-002-past-1",
                "appt-v-002-past-2",
                "appt-v-002-past-3",
                "appt-v-002-future-1",
                "appt-v-002-future-2",
            ]
        );
        assert!(appts.iter().all(|a| a.provider_name == "Dr. Michael Chen"));
        assert_eq!(appts[1].date_time, now - Duration::days(28));
        assert!(appts[1].is_virtual && !appts[0].is_virtual);
        assert_eq!(appts[3].title, "Pain Management");
        assert_eq!(appts[3].status, AppointmentStatus::Scheduled);
        assert_eq!(appts[4].date_time, now + Duration::days(20));

        let upcoming = schedule::upcoming(&appts, now);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].id, "appt-v-002-future-1");
        let past = schedule::past(&appts, now);
        assert_eq!(past[0].id, "appt-v-002-past-1");
    }

    #[test]
    fn test_messages_sorted_newest_first() {
        let messages = generators::messages::generate(&profile("v-003"), fixed_now());
        assert_eq!(messages.len(), 6);
        assert!(messages.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

        let reminder = messages.iter().find(|m| m.id == "msg-v-003-sys-0").unwrap();
        assert_eq!(reminder.priority, MessagePriority::Urgent);
        assert!(!reminder.is_read);
        assert!(reminder.content.contains("Dr. Lisa Patel"));

        let follow_up = messages.iter().find(|m| m.id == "msg-v-003-prov-0").unwrap();
        assert!(follow_up.content.starts_with("Hello Patricia,"));

        let reply = messages.iter().find(|m| m.id == "msg-v-003-resp-1").unwrap();
        assert_eq!(reply.sender_role, SenderRole::Veteran);
        assert_eq!(reply.subject, "Re: Lab Results Discussion");
        assert_eq!(reply.timestamp, fixed_now() - Duration::days(4) + Duration::hours(5));
    }

    #[test]
    fn test_alerts_include_one_resolved() {
        let now = fixed_now();
        let alerts = generators::alerts::generate(&profile("v-001"), now);
        let ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["alert-v-001-vital-1", "alert-v-001-ava-1", "alert-v-001-resolved-1"]);
        assert_eq!(alerts.iter().filter(|a| a.is_resolved).count(), 1);
        assert_eq!(
            alerts[0].description,
            "James Wilson's blood glucose reading was 210 mg/dL, above the target range."
        );

        let resolved = &alerts[2];
        assert_eq!(resolved.alert_type, AlertType::VitalSign);
        assert_eq!(resolved.timestamp, now - Duration::days(5));
        let meta = resolved.metadata.as_ref().unwrap();
        assert_eq!(meta["resolvedBy"], "Dr. Sarah Johnson");
        assert_eq!(meta["resolution"], "Medication adjustment");
        assert!(meta["resolvedDate"].starts_with("2026-10-16T10:30:00"));

        let top = top_unresolved(&alerts, 5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].severity, Severity::High);
    }

    #[test]
    fn test_predictions_are_canned() {
        let now = fixed_now();
        let preds = generators::predictions::generate(&profile("v-004"), now);
        assert_eq!(preds.len(), 1);
        assert_eq!(preds[0].id, "pred-v-004-1");
        assert_eq!(preds[0].confidence, 0.82);
        assert_eq!(preds[0].timestamp, now);
        assert_eq!(preds[0].suggested_actions.len(), 4);
    }

    // ── MockApi ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_get_veteran_by_id_not_found() {
        let api = instant_api();
        let err = api.get_veteran_by_id("v-404").await.unwrap_err();
        assert!(matches!(err, VetGuardianError::VeteranNotFound { .. }));
        assert_eq!(err.to_string(), "Veteran with ID v-404 not found.");

        let found = api.get_veteran_by_id("v-004").await.unwrap();
        assert_eq!(found.name, "George Thompson");
    }

    #[tokio::test]
    async fn test_scheduling_yields_distinct_ids_and_is_not_persisted() {
        let api = instant_api();
        let first = api.schedule_appointment(appointment_request()).await.unwrap();
        let second = api.schedule_appointment(appointment_request()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(first.id.starts_with("appt-"));
        assert_eq!(first.status, AppointmentStatus::Scheduled);

        let listed = api.get_appointments_for_veteran("v-001").await.unwrap();
        assert_eq!(listed.len(), 5);
        assert!(listed.iter().all(|a| a.id != first.id && a.id != second.id));

        assert_eq!(api.journal().len(), 2);
        assert!(api.journal().verify_integrity());
    }

    #[tokio::test]
    async fn test_resolve_alert_does_not_change_reads() {
        let api = instant_api();
        api.resolve_alert("alert-v-005-med-1").await.unwrap();
        let alerts = api.get_alerts_for_veteran("v-005").await.unwrap();
        let alert = alerts.iter().find(|a| a.id == "alert-v-005-med-1").unwrap();
        assert!(!alert.is_resolved);
    }

    #[tokio::test]
    async fn test_login_identities() {
        let api = instant_api();

        let vet = api.login_user(&Credentials::new("veteran@va.gov", "x")).await.unwrap();
        assert_eq!(vet.user.id, "v-001");
        assert_eq!(vet.user.role, UserRole::Veteran);
        assert_eq!(vet.token, "mock-veteran-token-123456");

        let doc = api.login_user(&Credentials::new("clinician1", "")).await.unwrap();
        assert_eq!(doc.user.name, "Dr. Sarah Johnson");
        assert_eq!(doc.token, "mock-clinician-token-654321");
        assert_eq!(doc.user.avatar.as_deref(), Some("https://api.dicebear.com/7.x/initials/svg?seed=SJ"));

        let err = api.login_user(&Credentials::new("admin", "hunter2")).await.unwrap_err();
        assert!(matches!(err, VetGuardianError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_search_patients() {
        let api = instant_api();
        let ids = |vs: Vec<vetguardian_contracts::veteran::Veteran>| {
            vs.into_iter().map(|v| v.id).collect::<Vec<_>>()
        };

        assert_eq!(ids(api.search_patients("ptsd").await.unwrap()), vec!["v-001", "v-005"]);
        assert_eq!(ids(api.search_patients("MILLER").await.unwrap()), vec!["v-002"]);
        assert_eq!(api.search_patients("   ").await.unwrap().len(), 5);
        assert!(api.search_patients("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_all_alerts_flattens_roster() {
        let api = instant_api();
        let all = api.get_all_alerts().await.unwrap();
        // 2 + 1 + 1 + 2 + 1 open alerts, plus one resolved per veteran.
        assert_eq!(all.len(), 12);
        assert_eq!(all.iter().filter(|a| a.is_resolved).count(), 5);
        assert_eq!(all[0].veteran_id, "v-001");
    }

    #[tokio::test]
    async fn test_writes_return_synthesized_records() {
        let api = instant_api();

        let sync = api.synchronize_with_vista("v-003").await.unwrap();
        assert!(sync.success);
        assert_eq!(sync.message, "Successfully synchronized data for veteran v-003 with VistA EHR system.");

        let plan = api
            .create_care_plan(vetguardian_contracts::care_plan::CarePlanInput {
                patient_id: "v-002".to_string(),
                patient_name: "Robert Miller".to_string(),
                condition: "Chronic Back Pain".to_string(),
                goals: "Reduce pain".to_string(),
                medications: "Duloxetine".to_string(),
                notes: String::new(),
            })
            .await
            .unwrap();
        let update = vetguardian_contracts::care_plan::CarePlanUpdate {
            goals: Some("Walk daily".to_string()),
            ..Default::default()
        };
        api.update_care_plan(plan, update).await.unwrap();

        let export = api.journal().export();
        assert_eq!(export.events.len(), 3);
        assert_eq!(export.events[2].record.detail["fields"][0], "goals");
    }

    #[tokio::test]
    async fn test_journal_drain_resets_between_batches() {
        let api = instant_api();
        api.mark_message_as_read("msg-v-001-sys-0").await.unwrap();
        api.resolve_alert("alert-v-001-ava-1").await.unwrap();

        let batch = api.journal().drain();
        assert_eq!(batch.events.len(), 2);
        assert!(api.journal().is_empty());

        api.resolve_alert("alert-v-004-ava-1").await.unwrap();
        assert_eq!(api.journal().export().events[0].sequence, 0);
        assert!(api.journal().verify_integrity());
    }

    #[tokio::test]
    async fn test_failure_rate_one_always_fails() {
        let api = MockApi::standard(SimulationPolicy::instant().with_failure_rate(1.0)).unwrap();
        for _ in 0..20 {
            let err = api.get_veterans().await.unwrap_err();
            assert!(err.is_transient());
            assert_eq!(err.to_string(), "Simulated API error. Please try again.");
        }
        let err = api.login_user(&Credentials::new("veteran", "")).await.unwrap_err();
        assert!(matches!(err, VetGuardianError::Simulated));
        assert!(api.journal().is_empty(), "failed writes are not journaled");
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_latency_is_applied() {
        let injector = FaultInjector::new(SimulationPolicy::default().with_failure_rate(0.0)).unwrap();
        let api = MockApi::new(Arc::new(roster()), injector).with_random(Arc::new(FixedRandom::new(0.5)));

        let start = tokio::time::Instant::now();
        api.get_veterans().await.unwrap();
        assert!(start.elapsed() >= StdDuration::from_millis(450));
        assert!(start.elapsed() < StdDuration::from_millis(600));
    }

    #[tokio::test]
    async fn test_seeded_policy_is_reproducible() {
        let a = MockApi::standard(SimulationPolicy::instant().with_seed(99)).unwrap();
        let b = MockApi::standard(SimulationPolicy::instant().with_seed(99)).unwrap();
        let va = a.get_vitals_for_veteran("v-001").await.unwrap();
        let vb = b.get_vitals_for_veteran("v-001").await.unwrap();
        let values = |v: &[vetguardian_contracts::vitals::VitalReading]| {
            v.iter().map(|r| (r.value, r.is_normal)).collect::<Vec<_>>()
        };
        assert_eq!(values(&va), values(&vb));
    }

    #[test]
    fn test_shipped_policy_matches_defaults() {
        let injector = FaultInjector::from_toml_str(DEFAULT_POLICY_TOML).unwrap();
        assert_eq!(injector.policy(), &SimulationPolicy::default());
    }

    #[test]
    fn test_random_source_is_object_safe() {
        let rng: Arc<dyn RandomSource> = Arc::new(FixedRandom::new(0.25));
        assert_eq!(rng.floor_between(0.0, 8.0), 2);
    }
}
