//! VetGuardian Mock API: Demo CLI
//!
//! Drives the simulated VetGuardian backend the way the clinician and
//! veteran dashboards do and prints what each view would show.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- dashboard
//!   cargo run -p demo -- patient v-001
//!   cargo run -p demo -- search ptsd
//!   cargo run -p demo -- login clinician
//!   cargo run -p demo -- --instant --seed 7 patient v-004

use std::{path::PathBuf, sync::Arc};

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vetguardian_contracts::{
    appointment::AppointmentStatus,
    auth::Credentials,
    error::{VetGuardianError, VetGuardianResult},
    vitals::VitalType,
};
use vetguardian_core::{buckets, ranking, schedule, summary, vitals};
use vetguardian_mock::{MockApi, Roster};
use vetguardian_policy::{FaultInjector, SimulationPolicy};

// ── CLI definition ────────────────────────────────────────────────────────────

/// VetGuardian telehealth mock backend demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "VetGuardian mock API demo",
    long_about = "Queries the simulated VetGuardian API with realistic latency and\n\
                  injected failures, then prints dashboard-style summaries."
)]
struct Cli {
    /// Simulation policy TOML (latency window, failure rate, seed).
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    /// Roster JSON to serve instead of the five standard veterans.
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Seed for reproducible vitals and severities.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Skip simulated latency and failures.
    #[arg(long, global = true)]
    instant: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Clinician dashboard, every patient view, and a few writes.
    RunAll,
    /// Clinician dashboard: risk tiles and the alert triage queue.
    Dashboard,
    /// Veteran dashboard for one veteran.
    Patient { id: String },
    /// Patient search by name, id, or condition.
    Search { query: String },
    /// Sign in with a username; the password is ignored.
    Login { username: String },
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Set RUST_LOG=debug to see every simulated call.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match build_api(&cli) {
        Ok(api) => run(&api, &cli.command).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn build_api(cli: &Cli) -> VetGuardianResult<MockApi> {
    let mut policy = match &cli.policy {
        Some(path) => FaultInjector::from_file(path)?.policy().clone(),
        None => SimulationPolicy::default(),
    };
    if cli.instant {
        policy = SimulationPolicy { seed: policy.seed, ..SimulationPolicy::instant() };
    }
    if let Some(seed) = cli.seed {
        policy = policy.with_seed(seed);
    }

    let roster = match &cli.roster {
        Some(path) => Roster::from_file(path)?,
        None => Roster::standard()?,
    };

    info!(
        veterans = roster.len(),
        min_ms = policy.latency.min_ms,
        max_ms = policy.latency.max_ms,
        failure_rate = policy.failure.rate,
        "mock api ready"
    );
    Ok(MockApi::new(Arc::new(roster), FaultInjector::new(policy)?))
}

async fn run(api: &MockApi, command: &Command) -> VetGuardianResult<()> {
    match command {
        Command::RunAll => run_all(api).await,
        Command::Dashboard => dashboard(api).await,
        Command::Patient { id } => patient(api, id).await,
        Command::Search { query } => search(api, query).await,
        Command::Login { username } => login(api, username).await,
    }
}

/// Retry transient failures a few times, the way the dashboards re-fetch.
async fn retrying<T, F, Fut>(label: &str, mut call: F) -> VetGuardianResult<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = VetGuardianResult<T>>,
{
    const ATTEMPTS: u32 = 3;
    let mut attempt = 1;
    loop {
        match call().await {
            Err(e) if e.is_transient() && attempt < ATTEMPTS => {
                println!("  ({} failed: {} Retrying.)", label, e);
                attempt += 1;
            }
            other => return other,
        }
    }
}

// ── Views ─────────────────────────────────────────────────────────────────────

async fn run_all(api: &MockApi) -> VetGuardianResult<()> {
    dashboard(api).await?;
    for veteran in retrying("get_veterans", || api.get_veterans()).await? {
        patient(api, &veteran.id).await?;
    }
    search(api, "PTSD").await?;
    login(api, "clinician").await?;
    writes(api).await
}

async fn dashboard(api: &MockApi) -> VetGuardianResult<()> {
    println!("=== Clinician Dashboard ===");
    println!();

    let veterans = retrying("get_veterans", || api.get_veterans()).await?;
    let risk = buckets::count_by_risk(&veterans);
    println!(
        "  Patients: {} (high risk {}, medium {}, low {})",
        veterans.len(),
        risk.high,
        risk.medium,
        risk.low
    );

    let alerts = retrying("get_all_alerts", || api.get_all_alerts()).await?;
    let open = buckets::count_unresolved_by_severity(&alerts);
    println!(
        "  Open alerts: {} (high {}, medium {}, low {})",
        open.total(),
        open.high,
        open.medium,
        open.low
    );
    println!();
    println!("  Triage queue:");
    for alert in ranking::top_unresolved(&alerts, 5) {
        println!(
            "    [{:<6}] {:<6} {}  {}",
            alert.severity.as_str(),
            alert.veteran_id,
            alert.timestamp.format("%Y-%m-%d %H:%M"),
            alert.title
        );
    }
    println!();
    Ok(())
}

async fn patient(api: &MockApi, id: &str) -> VetGuardianResult<()> {
    let veteran = retrying("get_veteran_by_id", || api.get_veteran_by_id(id)).await?;
    let now = Utc::now();

    println!("=== {} ({}) ===", veteran.name, veteran.id);
    println!(
        "  {} y/o {}, {}, risk {}, provider {}",
        veteran.age,
        veteran.gender,
        veteran.service_era,
        veteran.risk_level.as_str(),
        veteran.primary_provider
    );
    println!("  Conditions: {}", veteran.conditions.join(", "));

    let readings = retrying("get_vitals_for_veteran", || api.get_vitals_for_veteran(id)).await?;
    println!();
    println!("  Latest vitals:");
    for (vital_type, reading) in vitals::latest_by_type(&readings) {
        println!("    {:<16} {} {}", label(vital_type), reading.value, reading.unit);
    }
    let today = vitals::within(&readings, vitals::Lookback::Day, now);
    println!("    ({} readings in the last 24h, {} this week)", today.len(), readings.len());

    let meds = retrying("get_medications_for_veteran", || api.get_medications_for_veteran(id)).await?;
    let active = summary::active_medications(&meds);
    let adherence = summary::mean_adherence(&meds)
        .map(|rate| format!("{:.0}%", rate * 100.0))
        .unwrap_or_else(|| "n/a".to_string());
    println!();
    println!("  Medications: {} active, mean adherence {}", active.len(), adherence);
    for med in &active {
        println!("    {} {} ({})", med.name, med.dosage, med.frequency);
    }

    let appointments =
        retrying("get_appointments_for_veteran", || api.get_appointments_for_veteran(id)).await?;
    println!();
    match schedule::next_upcoming(&appointments, now) {
        Some(next) => println!(
            "  Next appointment: {} with {} on {}{}",
            next.title,
            next.provider_name,
            next.date_time.format("%Y-%m-%d"),
            if next.is_virtual { " (virtual)" } else { "" }
        ),
        None => println!("  Next appointment: none scheduled"),
    }

    let messages = retrying("get_messages_for_veteran", || api.get_messages_for_veteran(id)).await?;
    println!("  Unread messages: {}", summary::unread_messages(&messages).len());

    let predictions =
        retrying("get_predictions_for_veteran", || api.get_predictions_for_veteran(id)).await?;
    for prediction in predictions {
        println!(
            "  AVA insight ({:.0}% confidence): {}",
            prediction.confidence * 100.0,
            prediction.details
        );
    }
    println!();
    Ok(())
}

async fn search(api: &MockApi, query: &str) -> VetGuardianResult<()> {
    println!("=== Search: {:?} ===", query);
    let hits = retrying("search_patients", || api.search_patients(query)).await?;
    if hits.is_empty() {
        println!("  No matching patients");
    }
    for veteran in hits {
        println!("  {}  {:<18} {}", veteran.id, veteran.name, veteran.conditions.join(", "));
    }
    println!();
    Ok(())
}

async fn login(api: &MockApi, username: &str) -> VetGuardianResult<()> {
    println!("=== Login: {} ===", username);
    let credentials = Credentials::new(username, "");
    match retrying("login_user", || api.login_user(&credentials)).await {
        Ok(auth) => {
            println!("  Signed in as {} ({:?}, {})", auth.user.name, auth.user.role, auth.user.id);
            println!("  Token: {}", auth.token);
        }
        Err(VetGuardianError::InvalidCredentials) => println!("  Invalid credentials"),
        Err(e) => return Err(e),
    }
    println!();
    Ok(())
}

/// Accepted writes land in the journal; reads are unchanged.
async fn writes(api: &MockApi) -> VetGuardianResult<()> {
    println!("=== Writes ===");

    let alerts = retrying("get_alerts_for_veteran", || api.get_alerts_for_veteran("v-001")).await?;
    if let Some(alert) = ranking::top_unresolved(&alerts, 1).first() {
        retrying("resolve_alert", || api.resolve_alert(&alert.id)).await?;
        println!("  Resolved {}", alert.id);
    }

    let appointments =
        retrying("get_appointments_for_veteran", || api.get_appointments_for_veteran("v-001")).await?;
    if let Some(next) = schedule::next_upcoming(&appointments, Utc::now()) {
        retrying("update_appointment_status", || {
            api.update_appointment_status(&next.id, AppointmentStatus::Rescheduled)
        })
        .await?;
        println!("  Rescheduled {}", next.id);
    }

    let sync = retrying("synchronize_with_vista", || api.synchronize_with_vista("v-001")).await?;
    println!("  {}", sync.message);

    let intact = api.journal().verify_integrity();
    let journal = api.journal().drain();
    println!();
    println!("  Journal entries:    {}", journal.events.len());
    println!("  Chain integrity:    {}", if intact { "VALID" } else { "BROKEN" });
    println!("  Terminal hash:      {}", journal.terminal_hash);
    println!();
    Ok(())
}

fn label(vital_type: VitalType) -> &'static str {
    match vital_type {
        VitalType::BloodPressure => "Blood pressure",
        VitalType::HeartRate => "Heart rate",
        VitalType::Temperature => "Temperature",
        VitalType::Oxygen => "Oxygen",
        VitalType::Glucose => "Glucose",
        VitalType::Weight => "Weight",
    }
}
