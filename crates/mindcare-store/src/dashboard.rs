//! Practice overview: the counts and short lists shown on the home screen.

use std::path::Path;

use jiff::civil::Date;

use mindcare_core::models::assessment::Assessment;
use mindcare_core::models::client::Client;
use mindcare_core::models::session::Session;

use crate::collections;
use crate::error::StorageError;

pub const RECENT_CLIENTS: usize = 5;
pub const UPCOMING_SESSIONS: usize = 5;
pub const RECENT_ASSESSMENTS: usize = 3;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub total_clients: usize,
    pub active_clients: usize,
    pub total_assessments: usize,
    /// Most recently updated first.
    pub recent_clients: Vec<Client>,
    /// Every session dated today, by start time.
    pub todays_sessions: Vec<Session>,
    /// Scheduled sessions from today on, soonest first.
    pub upcoming_sessions: Vec<Session>,
    /// Newest first.
    pub recent_assessments: Vec<Assessment>,
}

pub fn dashboard(root: &Path, today: Date) -> Result<Dashboard, StorageError> {
    let clients = collections::list_clients(root)?;

    Ok(Dashboard {
        total_clients: clients.len(),
        active_clients: clients.iter().filter(|c| c.is_active()).count(),
        total_assessments: collections::list_assessments(root)?.len(),
        recent_clients: collections::recently_updated_clients(root, RECENT_CLIENTS)?,
        todays_sessions: collections::sessions_on(root, today)?,
        upcoming_sessions: collections::upcoming_sessions(root, today, UPCOMING_SESSIONS)?,
        recent_assessments: collections::recent_assessments(root, RECENT_ASSESSMENTS)?,
    })
}
