use std::path::Path;

use jiff::civil::Date;
use tracing::info;
use uuid::Uuid;

use mindcare_core::keys;
use mindcare_core::models::assessment::Assessment;
use mindcare_core::models::client::{Client, ClientStatus};
use mindcare_core::models::session::{Session, SessionStatus};

use crate::documents::{create_document, list_documents, load_document, save_document};
use crate::error::StorageError;
use crate::objects;

// Clients

pub fn put_client(root: &Path, client: &Client) -> Result<(), StorageError> {
    save_document(root, &keys::client(client.id), client)
}

pub fn get_client(root: &Path, id: Uuid) -> Result<Client, StorageError> {
    load_document(root, &keys::client(id)).map_err(|e| match e {
        StorageError::NotFound { .. } => StorageError::ClientNotFound(id),
        other => other,
    })
}

/// All clients, sorted by last then first name.
pub fn list_clients(root: &Path) -> Result<Vec<Client>, StorageError> {
    let mut clients: Vec<Client> = list_documents(root, keys::CLIENTS_PREFIX)?;
    clients.sort_by(|a, b| (&a.last_name, &a.first_name).cmp(&(&b.last_name, &b.first_name)));
    Ok(clients)
}

/// Clients whose name or email contains `query` (ignoring case), narrowed
/// to `status` when given. Same order as [`list_clients`].
pub fn search_clients(
    root: &Path,
    query: &str,
    status: Option<ClientStatus>,
) -> Result<Vec<Client>, StorageError> {
    let clients = list_clients(root)?
        .into_iter()
        .filter(|c| status.is_none_or(|s| c.status == s))
        .filter(|c| c.matches_search(query))
        .collect();
    Ok(clients)
}

/// Replace a stored client. `created_at` is kept from the stored copy and
/// `updated_at` is stamped now.
pub fn update_client(root: &Path, client: &Client) -> Result<Client, StorageError> {
    let stored = get_client(root, client.id)?;
    client.validate()?;

    let updated = Client {
        created_at: stored.created_at,
        updated_at: jiff::Timestamp::now(),
        ..client.clone()
    };
    put_client(root, &updated)?;

    info!(client_id = %updated.id, status = ?updated.status, "client updated");
    Ok(updated)
}

/// The `limit` most recently updated clients.
pub fn recently_updated_clients(root: &Path, limit: usize) -> Result<Vec<Client>, StorageError> {
    let mut clients = list_clients(root)?;
    clients.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    clients.truncate(limit);
    Ok(clients)
}

/// Delete a client along with every session and assessment recorded for it.
pub fn delete_client(root: &Path, id: Uuid) -> Result<(), StorageError> {
    get_client(root, id)?;

    let sessions = sessions_for_client(root, id)?;
    for session in &sessions {
        objects::delete_object(root, &keys::session(session.id))?;
    }
    let assessments = assessments_for_client(root, id)?;
    for assessment in &assessments {
        objects::delete_object(root, &keys::assessment(assessment.id))?;
    }
    objects::delete_object(root, &keys::client(id))?;

    info!(
        client_id = %id,
        sessions = sessions.len(),
        assessments = assessments.len(),
        "client deleted"
    );
    Ok(())
}

// Sessions

pub fn put_session(root: &Path, session: &Session) -> Result<(), StorageError> {
    save_document(root, &keys::session(session.id), session)
}

pub fn get_session(root: &Path, id: Uuid) -> Result<Session, StorageError> {
    load_document(root, &keys::session(id)).map_err(|e| match e {
        StorageError::NotFound { .. } => StorageError::SessionNotFound(id),
        other => other,
    })
}

pub fn list_sessions(root: &Path) -> Result<Vec<Session>, StorageError> {
    list_documents(root, keys::SESSIONS_PREFIX)
}

/// Replace a stored session. The owning client and `created_at` are kept
/// from the stored copy; `updated_at` is stamped now.
pub fn update_session(root: &Path, session: &Session) -> Result<Session, StorageError> {
    let stored = get_session(root, session.id)?;
    session.validate()?;

    let updated = Session {
        client_id: stored.client_id,
        created_at: stored.created_at,
        updated_at: jiff::Timestamp::now(),
        ..session.clone()
    };
    put_session(root, &updated)?;

    info!(session_id = %updated.id, client_id = %updated.client_id, "session updated");
    Ok(updated)
}

pub fn delete_session(root: &Path, id: Uuid) -> Result<(), StorageError> {
    let session = get_session(root, id)?;
    objects::delete_object(root, &keys::session(id))?;

    info!(session_id = %id, client_id = %session.client_id, "session deleted");
    Ok(())
}

/// A client's sessions, most recent date first.
pub fn sessions_for_client(root: &Path, client_id: Uuid) -> Result<Vec<Session>, StorageError> {
    let mut sessions: Vec<Session> = list_sessions(root)?
        .into_iter()
        .filter(|s| s.client_id == client_id)
        .collect();
    sessions.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(sessions)
}

/// Every session dated `day`, by start time.
pub fn sessions_on(root: &Path, day: Date) -> Result<Vec<Session>, StorageError> {
    let mut sessions: Vec<Session> = list_sessions(root)?
        .into_iter()
        .filter(|s| s.date == day)
        .collect();
    sessions.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    Ok(sessions)
}

/// Scheduled sessions dated `today` or later, soonest first, at most `limit`.
pub fn upcoming_sessions(
    root: &Path,
    today: Date,
    limit: usize,
) -> Result<Vec<Session>, StorageError> {
    let mut sessions: Vec<Session> = list_sessions(root)?
        .into_iter()
        .filter(|s| s.status == SessionStatus::Scheduled && s.date >= today)
        .collect();
    sessions.sort_by(|a, b| (a.date, &a.start_time).cmp(&(b.date, &b.start_time)));
    sessions.truncate(limit);
    Ok(sessions)
}

// Assessments. Created once, never rewritten.

pub(crate) fn insert_assessment(root: &Path, assessment: &Assessment) -> Result<(), StorageError> {
    create_document(root, &keys::assessment(assessment.id), assessment)
}

pub fn get_assessment(root: &Path, id: Uuid) -> Result<Assessment, StorageError> {
    load_document(root, &keys::assessment(id))
}

pub fn list_assessments(root: &Path) -> Result<Vec<Assessment>, StorageError> {
    list_documents(root, keys::ASSESSMENTS_PREFIX)
}

/// A client's assessments, most recent date first.
pub fn assessments_for_client(
    root: &Path,
    client_id: Uuid,
) -> Result<Vec<Assessment>, StorageError> {
    let mut assessments: Vec<Assessment> = list_assessments(root)?
        .into_iter()
        .filter(|a| a.client_id == client_id)
        .collect();
    assessments.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(assessments)
}

/// The `limit` most recently created assessments across all clients.
pub fn recent_assessments(root: &Path, limit: usize) -> Result<Vec<Assessment>, StorageError> {
    let mut assessments = list_assessments(root)?;
    assessments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    assessments.truncate(limit);
    Ok(assessments)
}
