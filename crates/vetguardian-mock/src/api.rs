//! The simulated asynchronous data-access API.
//!
//! `MockApi` fronts the generators with the behavior of a flaky remote
//! service. Every operation:
//!
//! 1. sleeps for a latency drawn from the simulation policy,
//! 2. fails with `VetGuardianError::Simulated` at the policy's failure rate,
//! 3. returns freshly generated records, or for writes a synthesized result.
//!
//! Writes are acknowledged and journaled but never applied: the next read
//! regenerates from the roster and does not reflect them.

use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use chrono::Utc;
use serde_json::json;
use tracing::debug;
use vetguardian_audit::{WriteJournal, WriteOperation, WriteRecord};
use vetguardian_contracts::{
    alert::Alert,
    appointment::{Appointment, AppointmentRequest, AppointmentStatus, DetailedAppointmentRequest},
    auth::{AuthResponse, AuthUser, Credentials, UserRole},
    care_plan::{CarePlanId, CarePlanInput, CarePlanUpdate, SyncOutcome},
    error::{VetGuardianError, VetGuardianResult},
    medication::Medication,
    message::{Message, OutgoingMessage},
    prediction::AvaPrediction,
    symptom::{NewSymptomReport, SymptomReport},
    veteran::Veteran,
    vitals::{NewVitalReading, VitalReading},
};
use vetguardian_core::{
    search::{filter_by_query, PATIENT_SEARCH_FIELDS},
    Dataset, RandomSource, SeededRandom, ThreadRandom,
};
use vetguardian_policy::{FaultInjector, SimulationPolicy};

use crate::{generators, roster::Roster};

/// The simulated VetGuardian backend.
pub struct MockApi {
    dataset: Arc<dyn Dataset>,
    injector: FaultInjector,
    rng: Arc<dyn RandomSource>,
    journal: WriteJournal,
    /// Last millisecond value handed out as an id.
    last_id: AtomicI64,
}

impl MockApi {
    /// Build an API over `dataset`. Draws come from a `SeededRandom` when the
    /// policy carries a seed, otherwise from thread-local randomness.
    pub fn new(dataset: Arc<dyn Dataset>, injector: FaultInjector) -> Self {
        let rng: Arc<dyn RandomSource> = match injector.policy().seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        Self {
            dataset,
            injector,
            rng,
            journal: WriteJournal::new(),
            last_id: AtomicI64::new(0),
        }
    }

    /// The standard roster behind `policy`.
    pub fn standard(policy: SimulationPolicy) -> VetGuardianResult<Self> {
        let injector = FaultInjector::new(policy)?;
        Ok(Self::new(Arc::new(Roster::standard()?), injector))
    }

    /// Replace the random source.
    pub fn with_random(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn dataset(&self) -> &dyn Dataset {
        self.dataset.as_ref()
    }

    pub fn policy(&self) -> &SimulationPolicy {
        self.injector.policy()
    }

    /// Every write accepted so far.
    pub fn journal(&self) -> &WriteJournal {
        &self.journal
    }

    async fn simulate(&self, operation: &'static str) -> VetGuardianResult<()> {
        let delay = self.injector.latency(self.rng.as_ref());
        debug!(operation, delay_ms = delay.as_millis() as u64, "mock api call");
        tokio::time::sleep(delay).await;
        self.injector.check(operation, self.rng.as_ref())
    }

    /// Current epoch milliseconds, bumped past the last issued value so ids
    /// stay unique within this instance.
    fn next_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(now.max(last + 1)))
            .unwrap_or_else(|last| last);
        now.max(prev + 1)
    }

    fn record(&self, record: WriteRecord) {
        self.journal.append(record);
    }

    // ── Veterans ──────────────────────────────────────────────────────────────

    pub async fn get_veterans(&self) -> VetGuardianResult<Vec<Veteran>> {
        self.simulate("get_veterans").await?;
        Ok(self.dataset.veterans())
    }

    pub async fn get_veteran_by_id(&self, id: &str) -> VetGuardianResult<Veteran> {
        self.simulate("get_veteran_by_id").await?;
        self.dataset
            .profile(id)
            .map(|p| p.veteran.clone())
            .ok_or_else(|| VetGuardianError::VeteranNotFound { id: id.to_string() })
    }

    /// Case-insensitive match on name, id, or any condition. A blank query
    /// returns the whole roster.
    pub async fn search_patients(&self, query: &str) -> VetGuardianResult<Vec<Veteran>> {
        self.simulate("search_patients").await?;
        Ok(filter_by_query(&self.dataset.veterans(), query, &PATIENT_SEARCH_FIELDS))
    }

    // ── Vitals ────────────────────────────────────────────────────────────────

    pub async fn get_vitals_for_veteran(&self, veteran_id: &str) -> VetGuardianResult<Vec<VitalReading>> {
        self.simulate("get_vitals_for_veteran").await?;
        Ok(generators::vitals_for(self.dataset(), veteran_id, Utc::now(), self.rng.as_ref()))
    }

    pub async fn add_vital_reading(
        &self,
        veteran_id: &str,
        reading: NewVitalReading,
    ) -> VetGuardianResult<VitalReading> {
        self.simulate("add_vital_reading").await?;
        let reading = reading.with_id(format!("vital-{}", self.next_millis()));
        self.record(
            WriteRecord::new(WriteOperation::AddVitalReading, &reading.id)
                .for_veteran(veteran_id)
                .with_detail(json!({
                    "type": reading.vital_type,
                    "value": reading.value.to_string(),
                    "unit": reading.unit,
                })),
        );
        Ok(reading)
    }

    // ── Medications ───────────────────────────────────────────────────────────

    pub async fn get_medications_for_veteran(&self, veteran_id: &str) -> VetGuardianResult<Vec<Medication>> {
        self.simulate("get_medications_for_veteran").await?;
        Ok(generators::medications_for(self.dataset(), veteran_id))
    }

    pub async fn update_medication_adherence(&self, medication_id: &str, taken: bool) -> VetGuardianResult<()> {
        self.simulate("update_medication_adherence").await?;
        self.record(
            WriteRecord::new(WriteOperation::UpdateMedicationAdherence, medication_id)
                .with_detail(json!({ "taken": taken })),
        );
        Ok(())
    }

    // ── Symptoms ──────────────────────────────────────────────────────────────

    pub async fn get_symptom_reports_for_veteran(
        &self,
        veteran_id: &str,
    ) -> VetGuardianResult<Vec<SymptomReport>> {
        self.simulate("get_symptom_reports_for_veteran").await?;
        Ok(generators::symptom_reports_for(self.dataset(), veteran_id, Utc::now(), self.rng.as_ref()))
    }

    pub async fn add_symptom_report(
        &self,
        veteran_id: &str,
        report: NewSymptomReport,
    ) -> VetGuardianResult<SymptomReport> {
        self.simulate("add_symptom_report").await?;
        let report = report.with_id(format!("symptom-{}", self.next_millis()));
        self.record(
            WriteRecord::new(WriteOperation::AddSymptomReport, &report.id)
                .for_veteran(veteran_id)
                .with_detail(json!({ "symptoms": report.symptoms.len() })),
        );
        Ok(report)
    }

    // ── Appointments ──────────────────────────────────────────────────────────

    pub async fn get_appointments_for_veteran(&self, veteran_id: &str) -> VetGuardianResult<Vec<Appointment>> {
        self.simulate("get_appointments_for_veteran").await?;
        Ok(generators::appointments_for(self.dataset(), veteran_id, Utc::now()))
    }

    /// Returns the appointment with a fresh `appt-<ms>` id and status
    /// `Scheduled`.
    pub async fn schedule_appointment(&self, request: AppointmentRequest) -> VetGuardianResult<Appointment> {
        self.simulate("schedule_appointment").await?;
        let veteran_id = request.patient_id.clone();
        let appointment = request.into_scheduled(format!("appt-{}", self.next_millis()));
        self.record(
            WriteRecord::new(WriteOperation::ScheduleAppointment, &appointment.id)
                .for_veteran(veteran_id)
                .with_detail(json!({
                    "title": appointment.title,
                    "dateTime": appointment.date_time,
                })),
        );
        Ok(appointment)
    }

    /// Clinician-side scheduling form; answers with a bare numeric id.
    pub async fn schedule_appointment_detailed(
        &self,
        request: DetailedAppointmentRequest,
    ) -> VetGuardianResult<CarePlanId> {
        self.simulate("schedule_appointment_detailed").await?;
        let id = CarePlanId(self.next_millis());
        self.record(
            WriteRecord::new(WriteOperation::ScheduleAppointmentDetailed, id.0.to_string())
                .for_veteran(&request.patient_id)
                .with_detail(json!({
                    "date": request.date,
                    "time": request.time,
                    "type": request.appointment_type,
                })),
        );
        Ok(id)
    }

    pub async fn update_appointment_status(
        &self,
        appointment_id: &str,
        status: AppointmentStatus,
    ) -> VetGuardianResult<()> {
        self.simulate("update_appointment_status").await?;
        self.record(
            WriteRecord::new(WriteOperation::UpdateAppointmentStatus, appointment_id)
                .with_detail(json!({ "status": status.as_str() })),
        );
        Ok(())
    }

    // ── Messages ──────────────────────────────────────────────────────────────

    /// Newest first.
    pub async fn get_messages_for_veteran(&self, veteran_id: &str) -> VetGuardianResult<Vec<Message>> {
        self.simulate("get_messages_for_veteran").await?;
        Ok(generators::messages_for(self.dataset(), veteran_id, Utc::now()))
    }

    /// Delivers `message` now, unread, under a fresh `msg-<ms>` id.
    pub async fn send_message(&self, message: OutgoingMessage) -> VetGuardianResult<Message> {
        self.simulate("send_message").await?;
        let message = message.deliver(format!("msg-{}", self.next_millis()), Utc::now());
        self.record(
            WriteRecord::new(WriteOperation::SendMessage, &message.id).with_detail(json!({
                "sender": message.sender,
                "recipient": message.recipient,
                "subject": message.subject,
            })),
        );
        Ok(message)
    }

    pub async fn mark_message_as_read(&self, message_id: &str) -> VetGuardianResult<()> {
        self.simulate("mark_message_as_read").await?;
        self.record(WriteRecord::new(WriteOperation::MarkMessageAsRead, message_id));
        Ok(())
    }

    // ── Alerts & predictions ──────────────────────────────────────────────────

    pub async fn get_alerts_for_veteran(&self, veteran_id: &str) -> VetGuardianResult<Vec<Alert>> {
        self.simulate("get_alerts_for_veteran").await?;
        Ok(generators::alerts_for(self.dataset(), veteran_id, Utc::now()))
    }

    /// Alerts for the whole roster, in roster order.
    pub async fn get_all_alerts(&self) -> VetGuardianResult<Vec<Alert>> {
        self.simulate("get_all_alerts").await?;
        Ok(generators::all_alerts(self.dataset(), Utc::now()))
    }

    pub async fn resolve_alert(&self, alert_id: &str) -> VetGuardianResult<()> {
        self.simulate("resolve_alert").await?;
        self.record(WriteRecord::new(WriteOperation::ResolveAlert, alert_id));
        Ok(())
    }

    pub async fn get_predictions_for_veteran(&self, veteran_id: &str) -> VetGuardianResult<Vec<AvaPrediction>> {
        self.simulate("get_predictions_for_veteran").await?;
        Ok(generators::predictions_for(self.dataset(), veteran_id, Utc::now()))
    }

    // ── Integration ───────────────────────────────────────────────────────────

    pub async fn synchronize_with_vista(&self, veteran_id: &str) -> VetGuardianResult<SyncOutcome> {
        self.simulate("synchronize_with_vista").await?;
        self.record(
            WriteRecord::new(WriteOperation::SynchronizeWithVista, veteran_id).for_veteran(veteran_id),
        );
        Ok(SyncOutcome {
            success: true,
            message: format!(
                "Successfully synchronized data for veteran {} with VistA EHR system.",
                veteran_id
            ),
        })
    }

    // ── Auth ──────────────────────────────────────────────────────────────────

    /// Usernames containing `veteran` sign in as James Wilson, those
    /// containing `clinician` as Dr. Sarah Johnson. The password is ignored.
    pub async fn login_user(&self, credentials: &Credentials) -> VetGuardianResult<AuthResponse> {
        self.simulate("login_user").await?;

        let (id, name, role, initials, token) = if credentials.username.contains("veteran") {
            ("v-001", "James Wilson", UserRole::Veteran, "JW", "mock-veteran-token-123456")
        } else if credentials.username.contains("clinician") {
            ("c-001", "Dr. Sarah Johnson", UserRole::Clinician, "SJ", "mock-clinician-token-654321")
        } else {
            return Err(VetGuardianError::InvalidCredentials);
        };

        Ok(AuthResponse {
            user: AuthUser {
                id: id.to_string(),
                name: name.to_string(),
                role,
                avatar: Some(format!("https://api.dicebear.com/7.x/initials/svg?seed={}", initials)),
            },
            token: token.to_string(),
        })
    }

    // ── Care plans ────────────────────────────────────────────────────────────

    pub async fn create_care_plan(&self, plan: CarePlanInput) -> VetGuardianResult<CarePlanId> {
        self.simulate("create_care_plan").await?;
        let id = CarePlanId(self.next_millis());
        self.record(
            WriteRecord::new(WriteOperation::CreateCarePlan, id.0.to_string())
                .for_veteran(&plan.patient_id)
                .with_detail(json!({ "condition": plan.condition })),
        );
        Ok(id)
    }

    pub async fn update_care_plan(&self, plan_id: CarePlanId, update: CarePlanUpdate) -> VetGuardianResult<()> {
        self.simulate("update_care_plan").await?;
        let mut record = WriteRecord::new(WriteOperation::UpdateCarePlan, plan_id.0.to_string())
            .with_detail(json!({ "fields": update.changed_fields() }));
        if let Some(patient_id) = update.patient_id {
            record = record.for_veteran(patient_id);
        }
        self.record(record);
        Ok(())
    }
}
