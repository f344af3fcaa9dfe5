use std::collections::{BTreeSet, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};

use eyre::{WrapErr, bail};
use tracing::{info, warn};
use uuid::Uuid;

use mindcare_core::models::assessment::{Assessment, SuggestedDisorder};
use mindcare_core::models::client::{Client, ClientStatus, EmergencyContact};
use mindcare_core::models::session::Session;
use mindcare_dsm::catalog::{Catalog, DsmCategory};
use mindcare_dsm::dsm5;
use mindcare_store::record::NewAssessment;
use mindcare_store::{backup, collections, dashboard, record};

use crate::cli::{CatalogAction, Cli, ClientAction, Commands, ConfigAction, SessionAction};
use crate::config::{self, MindcareConfig};

/// Suggestions shown after saving an assessment.
const SAVED_SUGGESTIONS_SHOWN: usize = 5;
/// Suggestions shown per assessment in listings.
const LISTED_SUGGESTIONS_SHOWN: usize = 3;

/// Everything a command needs once flags, environment and the saved
/// config have been resolved.
pub struct Context {
    pub config_dir: PathBuf,
    pub config: Option<MindcareConfig>,
    pub data_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
}

impl Context {
    /// Flags and environment win over the saved config, which wins over
    /// platform defaults.
    pub fn resolve(cli: &Cli, config_dir: PathBuf) -> eyre::Result<Self> {
        let config = config::load_config(&config_dir)?;
        let data_dir = match (&cli.data_dir, &config) {
            (Some(dir), _) => dir.clone(),
            (None, Some(config)) => config.data_dir.clone(),
            (None, None) => config::default_data_dir()?,
        };
        let catalog_path = cli
            .catalog
            .clone()
            .or_else(|| config.as_ref().and_then(|c| c.catalog_path.clone()));

        Ok(Self {
            config_dir,
            config,
            data_dir,
            catalog_path,
        })
    }

    fn catalog(&self) -> eyre::Result<Catalog> {
        load_catalog(self.catalog_path.as_deref())
    }
}

/// The catalog at `path`, or the built-in DSM-5 tables.
pub fn load_catalog(path: Option<&Path>) -> eyre::Result<Catalog> {
    let Some(path) = path else {
        return Ok(dsm5::catalog().clone());
    };
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&json)
        .wrap_err_with(|| format!("invalid catalog {}", path.display()))?;
    info!(
        path = %path.display(),
        symptoms = catalog.symptoms().len(),
        disorders = catalog.disorders().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub fn run(command: Commands, ctx: &Context, out: &mut impl Write) -> eyre::Result<()> {
    match command {
        Commands::Dashboard => show_dashboard(ctx, out),
        Commands::Symptoms { category } => list_symptoms(&ctx.catalog()?, category, out),
        Commands::Disorders { category } => list_disorders(&ctx.catalog()?, category, out),
        Commands::Match { symptoms, top } => {
            let catalog = ctx.catalog()?;
            let selected = selection(&catalog, symptoms);
            let mut matches = catalog.compute_matches(&selected);
            if let Some(top) = top {
                matches.truncate(top);
            }
            let per_category: Vec<String> = DsmCategory::ALL
                .into_iter()
                .map(|c| (c, catalog.selected_in_category(&selected, c)))
                .filter(|(_, count)| *count > 0)
                .map(|(c, count)| format!("{c} {count}"))
                .collect();
            if !per_category.is_empty() {
                writeln!(out, "Selected by category: {}", per_category.join(", "))?;
            }
            if matches.is_empty() {
                writeln!(out, "No disorders match the selected symptoms.")?;
            }
            for (rank, suggestion) in matches.iter().enumerate() {
                write_suggestion(out, rank + 1, suggestion)?;
            }
            Ok(())
        }
        Commands::Catalog { action } => catalog_command(action, &ctx.catalog()?, out),
        Commands::Client { action } => client_command(action, ctx, out),
        Commands::Session { action } => session_command(action, ctx, out),
        Commands::Assess {
            client,
            notes,
            symptoms,
        } => {
            let catalog = ctx.catalog()?;
            let new = NewAssessment {
                client_id: client,
                selected_symptoms: selection(&catalog, symptoms),
                clinician_notes: notes,
            };
            let assessment = record::create_assessment(&ctx.data_dir, &catalog, new)?;
            writeln!(
                out,
                "Saved assessment {} ({} symptoms identified)",
                assessment.id,
                assessment.selected_symptoms.len()
            )?;
            for (rank, suggestion) in assessment
                .suggested_disorders
                .iter()
                .take(SAVED_SUGGESTIONS_SHOWN)
                .enumerate()
            {
                write_suggestion(out, rank + 1, suggestion)?;
            }
            Ok(())
        }
        Commands::Assessments { client, recent } => {
            let assessments = match (client, recent) {
                (Some(id), _) => collections::assessments_for_client(&ctx.data_dir, id)?,
                (None, Some(limit)) => collections::recent_assessments(&ctx.data_dir, limit)?,
                (None, None) => {
                    let mut all = collections::list_assessments(&ctx.data_dir)?;
                    all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                    all
                }
            };
            if assessments.is_empty() {
                writeln!(out, "No assessments found.")?;
            }
            for assessment in &assessments {
                let name = collections::get_client(&ctx.data_dir, assessment.client_id)
                    .map(|c| c.full_name())
                    .unwrap_or_else(|_| "Unknown Client".to_string());
                write_assessment(out, assessment, &name)?;
            }
            Ok(())
        }
        Commands::Export { path } => {
            let path = path.unwrap_or_else(|| {
                PathBuf::from(backup::default_file_name(jiff::Zoned::now().date()))
            });
            let summary = backup::write_backup(&ctx.data_dir, &path)?;
            writeln!(out, "Exported {summary} to {}", path.display())?;
            Ok(())
        }
        Commands::Import { path, yes } => {
            let json = std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read backup {}", path.display()))?;
            // Parse up front so a bad file is reported before asking for --yes.
            backup::parse_backup(&json)?;
            if !yes {
                bail!("import replaces all existing records; re-run with --yes to confirm");
            }
            let summary = backup::import_backup(&ctx.data_dir, &json)?;
            writeln!(out, "Successfully imported {summary}.")?;
            Ok(())
        }
        Commands::Clear { yes } => {
            if !yes {
                bail!("refusing to delete all records without --yes");
            }
            let summary = backup::clear_all(&ctx.data_dir)?;
            writeln!(out, "Deleted {summary}.")?;
            Ok(())
        }
        Commands::Config { action } => config_command(action, ctx, out),
    }
}

/// Turn raw ids into a selection, warning about ids the catalog lacks.
/// Unknown ids are kept; they simply never match.
fn selection(catalog: &Catalog, ids: Vec<String>) -> BTreeSet<String> {
    let selected: BTreeSet<String> = ids.into_iter().map(|id| id.trim().to_string()).collect();
    let unknown = catalog.unknown_symptoms(&selected);
    if !unknown.is_empty() {
        warn!(?unknown, "selection contains ids not in the catalog");
    }
    selected
}

fn list_symptoms(
    catalog: &Catalog,
    category: Option<DsmCategory>,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let categories = category.map_or(DsmCategory::ALL.to_vec(), |c| vec![c]);
    for category in categories {
        writeln!(out, "{}", category.display_name())?;
        for symptom in catalog.symptoms_in(category) {
            writeln!(out, "  {:<8} {}", symptom.id, symptom.name)?;
        }
    }
    Ok(())
}

fn list_disorders(
    catalog: &Catalog,
    category: Option<DsmCategory>,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let categories = category.map_or(DsmCategory::ALL.to_vec(), |c| vec![c]);
    for category in categories {
        writeln!(out, "{}", category.display_name())?;
        for disorder in catalog.disorders_in(category) {
            writeln!(
                out,
                "  {:<10} {:<8} {} (needs {} of {})",
                disorder.id,
                disorder.code,
                disorder.name,
                disorder.minimum_symptoms,
                disorder.required_symptoms.len()
            )?;
        }
    }
    Ok(())
}

fn catalog_command(
    action: CatalogAction,
    catalog: &Catalog,
    out: &mut impl Write,
) -> eyre::Result<()> {
    match action {
        CatalogAction::Check => {
            catalog.validate()?;
            writeln!(
                out,
                "Catalog OK: {} symptoms, {} disorders",
                catalog.symptoms().len(),
                catalog.disorders().len()
            )?;
        }
        CatalogAction::Dump => writeln!(out, "{}", catalog.to_json()?)?,
    }
    Ok(())
}

fn client_command(
    action: ClientAction,
    ctx: &Context,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let root = ctx.data_dir.as_path();
    match action {
        ClientAction::Add {
            first_name,
            last_name,
            dob,
            email,
            phone,
            start_date,
            emergency_name,
            emergency_relationship,
            emergency_phone,
        } => {
            let now = jiff::Timestamp::now();
            let client = Client {
                id: Uuid::new_v4(),
                first_name,
                last_name,
                date_of_birth: dob,
                email,
                phone,
                address: None,
                emergency_contact: EmergencyContact {
                    name: emergency_name.unwrap_or_default(),
                    relationship: emergency_relationship.unwrap_or_default(),
                    phone: emergency_phone.unwrap_or_default(),
                },
                insurance_provider: None,
                insurance_id: None,
                referral_source: None,
                start_date: start_date.unwrap_or_else(|| jiff::Zoned::now().date()),
                status: ClientStatus::Active,
                notes: None,
                created_at: now,
                updated_at: now,
            };
            client.validate()?;
            collections::put_client(root, &client)?;
            info!(client_id = %client.id, "client added");
            writeln!(out, "Added client {} ({})", client.full_name(), client.id)?;
        }
        ClientAction::Edit {
            id,
            first_name,
            last_name,
            dob,
            email,
            phone,
            address,
            start_date,
            status,
            notes,
            emergency_name,
            emergency_relationship,
            emergency_phone,
        } => {
            let mut client = collections::get_client(root, id)?;
            if let Some(first_name) = first_name {
                client.first_name = first_name;
            }
            if let Some(last_name) = last_name {
                client.last_name = last_name;
            }
            if let Some(dob) = dob {
                client.date_of_birth = dob;
            }
            if let Some(email) = email {
                client.email = email;
            }
            if let Some(phone) = phone {
                client.phone = phone;
            }
            if let Some(start_date) = start_date {
                client.start_date = start_date;
            }
            if let Some(status) = status {
                client.status = status;
            }
            if let Some(name) = emergency_name {
                client.emergency_contact.name = name;
            }
            if let Some(relationship) = emergency_relationship {
                client.emergency_contact.relationship = relationship;
            }
            if let Some(phone) = emergency_phone {
                client.emergency_contact.phone = phone;
            }
            // An empty value clears an optional field.
            if let Some(address) = address {
                client.address = Some(address).filter(|a| !a.is_empty());
            }
            if let Some(notes) = notes {
                client.notes = Some(notes).filter(|n| !n.is_empty());
            }

            let client = collections::update_client(root, &client)?;
            writeln!(
                out,
                "Updated client {} ({}), {}",
                client.full_name(),
                client.id,
                status_label(client.status)
            )?;
        }
        ClientAction::List { search, status } => {
            let today = jiff::Zoned::now().date();
            let query = search.unwrap_or_default();
            let clients = collections::search_clients(root, query.trim(), status)?;
            if clients.is_empty() {
                writeln!(out, "No clients found.")?;
            }
            for client in &clients {
                writeln!(
                    out,
                    "{}  {:<28} age {:<3} {}",
                    client.id,
                    client.sort_name(),
                    client.age_on(today),
                    status_label(client.status)
                )?;
            }
        }
        ClientAction::Show { id } => {
            let client = collections::get_client(root, id)?;
            let today = jiff::Zoned::now().date();
            writeln!(out, "{} ({})", client.full_name(), client.id)?;
            writeln!(
                out,
                "  born {} (age {}), client since {}, {}",
                client.date_of_birth,
                client.age_on(today),
                client.start_date,
                status_label(client.status)
            )?;
            if !client.emergency_contact.name.is_empty() {
                let contact = &client.emergency_contact;
                writeln!(
                    out,
                    "  emergency contact: {} ({}) {}",
                    contact.name, contact.relationship, contact.phone
                )?;
            }

            let sessions = collections::sessions_for_client(root, id)?;
            writeln!(out, "Sessions ({})", sessions.len())?;
            for session in &sessions {
                write_session(out, session)?;
            }

            let assessments = collections::assessments_for_client(root, id)?;
            writeln!(out, "Assessments ({})", assessments.len())?;
            for assessment in &assessments {
                write_assessment(out, assessment, &client.full_name())?;
            }
        }
        ClientAction::Delete { id, yes } => {
            if !yes {
                bail!("refusing to delete client {id} and their records without --yes");
            }
            collections::delete_client(root, id)?;
            writeln!(out, "Deleted client {id}")?;
        }
    }
    Ok(())
}

fn session_command(
    action: SessionAction,
    ctx: &Context,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let root = ctx.data_dir.as_path();
    match action {
        SessionAction::Add {
            client,
            date,
            start_time,
            duration,
            session_type,
            status,
            mood,
            risk,
            notes,
        } => {
            collections::get_client(root, client)?;
            let now = jiff::Timestamp::now();
            let session = Session {
                id: Uuid::new_v4(),
                client_id: client,
                date: date.unwrap_or_else(|| jiff::Zoned::now().date()),
                start_time,
                end_time: None,
                duration,
                session_type,
                status,
                notes,
                mood,
                risk_level: risk,
                goals: None,
                interventions: None,
                homework: None,
                created_at: now,
                updated_at: now,
            };
            session.validate()?;
            collections::put_session(root, &session)?;
            info!(session_id = %session.id, client_id = %client, "session recorded");
            writeln!(out, "Recorded session {} on {}", session.id, session.date)?;
        }
        SessionAction::Edit {
            id,
            date,
            start_time,
            duration,
            session_type,
            status,
            mood,
            risk,
            notes,
        } => {
            let mut session = collections::get_session(root, id)?;
            if let Some(date) = date {
                session.date = date;
            }
            if let Some(start_time) = start_time {
                session.start_time = start_time;
            }
            if let Some(duration) = duration {
                session.duration = duration;
            }
            if let Some(session_type) = session_type {
                session.session_type = session_type;
            }
            if let Some(status) = status {
                session.status = status;
            }
            if mood.is_some() {
                session.mood = mood;
            }
            if risk.is_some() {
                session.risk_level = risk;
            }
            if let Some(notes) = notes {
                session.notes = notes;
            }

            let session = collections::update_session(root, &session)?;
            writeln!(out, "Updated session {} on {}", session.id, session.date)?;
        }
        SessionAction::Delete { id, yes } => {
            if !yes {
                bail!("refusing to delete session {id} without --yes");
            }
            collections::delete_session(root, id)?;
            writeln!(out, "Deleted session {id}")?;
        }
        SessionAction::List { client } => {
            collections::get_client(root, client)?;
            let sessions = collections::sessions_for_client(root, client)?;
            if sessions.is_empty() {
                writeln!(out, "No sessions found.")?;
            }
            for session in &sessions {
                write_session(out, session)?;
            }
        }
    }
    Ok(())
}

fn config_command(
    action: ConfigAction,
    ctx: &Context,
    out: &mut impl Write,
) -> eyre::Result<()> {
    match action {
        ConfigAction::Show => {
            writeln!(out, "config dir:  {}", ctx.config_dir.display())?;
            writeln!(out, "data dir:    {}", ctx.data_dir.display())?;
            match &ctx.catalog_path {
                Some(path) => writeln!(out, "catalog:     {}", path.display())?,
                None => writeln!(out, "catalog:     built-in DSM-5")?,
            }
            if ctx.config.is_none() {
                writeln!(out, "(no saved config; showing defaults)")?;
            }
        }
        ConfigAction::SetDataDir { path } => {
            let mut config = saved_or_new(ctx);
            config.data_dir = path;
            config::save_config(&ctx.config_dir, &config)?;
            writeln!(out, "Data directory set to {}", config.data_dir.display())?;
        }
        ConfigAction::SetCatalog { path } => {
            if let Some(path) = &path {
                // Refuse to save a catalog that would fail on every later run.
                load_catalog(Some(path))?;
            }
            let mut config = saved_or_new(ctx);
            config.catalog_path = path;
            config::save_config(&ctx.config_dir, &config)?;
            match &config.catalog_path {
                Some(path) => writeln!(out, "Catalog set to {}", path.display())?,
                None => writeln!(out, "Catalog reset to built-in DSM-5")?,
            }
        }
    }
    Ok(())
}

fn saved_or_new(ctx: &Context) -> MindcareConfig {
    ctx.config
        .clone()
        .unwrap_or_else(|| MindcareConfig::new(ctx.data_dir.clone()))
}

fn show_dashboard(ctx: &Context, out: &mut impl Write) -> eyre::Result<()> {
    let root = ctx.data_dir.as_path();
    let view = dashboard::dashboard(root, jiff::Zoned::now().date())?;
    let names: HashMap<Uuid, String> = collections::list_clients(root)?
        .into_iter()
        .map(|c| (c.id, c.full_name()))
        .collect();
    let name_of = |id: &Uuid| names.get(id).map_or("Unknown Client", String::as_str);

    writeln!(
        out,
        "Clients: {} active of {}",
        view.active_clients, view.total_clients
    )?;
    writeln!(out, "Assessments: {}", view.total_assessments)?;

    writeln!(out, "Today's sessions ({})", view.todays_sessions.len())?;
    for session in &view.todays_sessions {
        writeln!(out, "  {} {}", session.start_time, name_of(&session.client_id))?;
    }

    writeln!(out, "Upcoming sessions ({})", view.upcoming_sessions.len())?;
    for session in &view.upcoming_sessions {
        writeln!(
            out,
            "  {} {} {}",
            session.date,
            session.start_time,
            name_of(&session.client_id)
        )?;
    }

    writeln!(out, "Recent assessments ({})", view.recent_assessments.len())?;
    for assessment in &view.recent_assessments {
        let top = assessment
            .top_suggestion()
            .map_or("no suggestions".to_string(), |s| {
                format!("{} {}%", s.name, s.percentage)
            });
        writeln!(
            out,
            "  {} {}: {}",
            assessment.date,
            name_of(&assessment.client_id),
            top
        )?;
    }

    writeln!(out, "Recently updated clients")?;
    for client in &view.recent_clients {
        writeln!(
            out,
            "  {:<28} {}",
            client.sort_name(),
            status_label(client.status)
        )?;
    }
    Ok(())
}

fn status_label(status: ClientStatus) -> &'static str {
    match status {
        ClientStatus::Active => "active",
        ClientStatus::Inactive => "inactive",
        ClientStatus::Discharged => "discharged",
    }
}

fn write_suggestion(
    out: &mut impl Write,
    rank: usize,
    suggestion: &SuggestedDisorder,
) -> eyre::Result<()> {
    writeln!(
        out,
        "{rank:>2}. {} ({})  {}  {}%  {} of {} minimum symptoms",
        suggestion.name,
        suggestion.code,
        suggestion.confidence,
        suggestion.percentage,
        suggestion.matched_symptoms.len(),
        suggestion.minimum_required
    )?;
    Ok(())
}

fn write_session(out: &mut impl Write, session: &Session) -> eyre::Result<()> {
    let kind = serde_json::to_value(session.session_type)?;
    let status = serde_json::to_value(session.status)?;
    write!(
        out,
        "  {}  {} {} {}min {} {}",
        session.id,
        session.date,
        session.start_time,
        session.duration,
        kind.as_str().unwrap_or_default(),
        status.as_str().unwrap_or_default()
    )?;
    if let Some(mood) = session.mood {
        write!(out, " mood {mood}/10")?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_assessment(
    out: &mut impl Write,
    assessment: &Assessment,
    client_name: &str,
) -> eyre::Result<()> {
    writeln!(
        out,
        "{}  {}  {}  {} symptoms identified",
        assessment.date,
        assessment.id,
        client_name,
        assessment.selected_symptoms.len()
    )?;
    for (rank, suggestion) in assessment
        .suggested_disorders
        .iter()
        .take(LISTED_SUGGESTIONS_SHOWN)
        .enumerate()
    {
        write!(out, "  ")?;
        write_suggestion(out, rank + 1, suggestion)?;
    }
    Ok(())
}
