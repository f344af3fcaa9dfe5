use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use mindcare_core::models::client::ClientStatus;
use mindcare_core::models::session::{RiskLevel, SessionStatus, SessionType};
use mindcare_dsm::catalog::DsmCategory;

#[derive(Debug, Parser)]
#[command(name = "mindcare")]
#[command(about = "MindCare practice records and DSM-5 symptom matcher")]
pub struct Cli {
    /// Directory holding client, session and assessment records
    #[arg(long, global = true, env = "MINDCARE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
    /// Catalog JSON to use instead of the built-in DSM-5 tables
    #[arg(long, global = true, env = "MINDCARE_CATALOG")]
    pub catalog: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Practice overview: client counts, today's and upcoming sessions,
    /// recent assessments
    Dashboard,
    /// List checklist symptoms
    Symptoms {
        /// Only symptoms in this category (e.g. anxiety, ocd)
        #[arg(long)]
        category: Option<DsmCategory>,
    },
    /// List reference disorders
    Disorders {
        /// Only disorders in this category
        #[arg(long)]
        category: Option<DsmCategory>,
    },
    /// Rank disorders against a set of symptom ids without saving
    Match {
        /// Symptom ids, e.g. anx-1 anx-2
        #[arg(required = true)]
        symptoms: Vec<String>,
        /// Show at most this many suggestions
        #[arg(long)]
        top: Option<usize>,
    },
    /// Inspect or export the symptom catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage clients
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },
    /// Record and list therapy sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Run the matcher for a client and save the result as an assessment
    Assess {
        /// Client UUID
        #[arg(long)]
        client: Uuid,
        /// Clinician notes stored with the assessment
        #[arg(long, default_value = "")]
        notes: String,
        /// Symptom ids observed
        #[arg(required = true)]
        symptoms: Vec<String>,
    },
    /// List saved assessments
    Assessments {
        /// Only this client's assessments
        #[arg(long, conflicts_with = "recent")]
        client: Option<Uuid>,
        /// Only the N most recently created
        #[arg(long)]
        recent: Option<usize>,
    },
    /// Write every record to a backup file
    Export {
        /// Output file (default: mindcare-pro-backup-YYYY-MM-DD.json)
        path: Option<PathBuf>,
    },
    /// Replace all records with the contents of a backup file
    Import {
        path: PathBuf,
        /// Confirm that existing records will be deleted
        #[arg(long)]
        yes: bool,
    },
    /// Delete every client, session and assessment
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum CatalogAction {
    /// Check the active catalog's integrity and print its size
    Check,
    /// Print the active catalog as JSON
    Dump,
}

#[derive(Debug, Subcommand)]
pub enum ClientAction {
    /// Register a new client
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: jiff::civil::Date,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// First session date (YYYY-MM-DD, default today)
        #[arg(long)]
        start_date: Option<jiff::civil::Date>,
        #[arg(long)]
        emergency_name: Option<String>,
        #[arg(long)]
        emergency_relationship: Option<String>,
        #[arg(long)]
        emergency_phone: Option<String>,
    },
    /// Change fields of an existing client
    Edit {
        id: Uuid,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: Option<jiff::civil::Date>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        start_date: Option<jiff::civil::Date>,
        /// active, inactive or discharged
        #[arg(long, value_parser = parse_kebab::<ClientStatus>)]
        status: Option<ClientStatus>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        emergency_name: Option<String>,
        #[arg(long)]
        emergency_relationship: Option<String>,
        #[arg(long)]
        emergency_phone: Option<String>,
    },
    /// List clients, sorted by last name
    List {
        /// Only clients whose name or email contains this text
        #[arg(long)]
        search: Option<String>,
        /// Only clients with this status (active, inactive or discharged)
        #[arg(long, value_parser = parse_kebab::<ClientStatus>)]
        status: Option<ClientStatus>,
    },
    /// Show a client with their sessions and assessments
    Show { id: Uuid },
    /// Delete a client and all of their records
    Delete {
        id: Uuid,
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum SessionAction {
    /// Record a session
    Add {
        /// Client UUID
        #[arg(long)]
        client: Uuid,
        /// Session date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<jiff::civil::Date>,
        /// Start time (HH:MM)
        #[arg(long, default_value = "09:00")]
        start_time: String,
        /// Minutes
        #[arg(long, default_value_t = 50)]
        duration: u32,
        /// initial, follow-up, crisis, family, group or telehealth
        #[arg(
            long = "type",
            default_value = "follow-up",
            value_parser = parse_kebab::<SessionType>
        )]
        session_type: SessionType,
        /// scheduled, completed, cancelled or no-show
        #[arg(long, default_value = "completed", value_parser = parse_kebab::<SessionStatus>)]
        status: SessionStatus,
        /// Mood rating, 1 to 10
        #[arg(long)]
        mood: Option<u8>,
        /// none, low, moderate or high
        #[arg(long, value_parser = parse_kebab::<RiskLevel>)]
        risk: Option<RiskLevel>,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Change fields of an existing session
    Edit {
        id: Uuid,
        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<jiff::civil::Date>,
        /// Start time (HH:MM)
        #[arg(long)]
        start_time: Option<String>,
        /// Minutes
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long = "type", value_parser = parse_kebab::<SessionType>)]
        session_type: Option<SessionType>,
        #[arg(long, value_parser = parse_kebab::<SessionStatus>)]
        status: Option<SessionStatus>,
        /// Mood rating, 1 to 10
        #[arg(long)]
        mood: Option<u8>,
        #[arg(long, value_parser = parse_kebab::<RiskLevel>)]
        risk: Option<RiskLevel>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a session
    Delete {
        id: Uuid,
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
    /// List a client's sessions, newest first
    List {
        /// Client UUID
        #[arg(long)]
        client: Uuid,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Save a new default data directory
    SetDataDir { path: PathBuf },
    /// Save a catalog file to use by default, or clear it
    SetCatalog {
        /// Omit to go back to the built-in catalog
        path: Option<PathBuf>,
    },
}

/// Parse a value spelled the way the record format spells it.
fn parse_kebab<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|_| format!("unrecognised value {s:?}"))
}
