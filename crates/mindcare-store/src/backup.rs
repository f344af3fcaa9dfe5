//! Whole-practice JSON backups.
//!
//! Backup files are the MindCare Pro export format:
//! `{ "version": "1.0", "exportDate": ..., "data": { "clients": [...],
//! "sessions": [...], "assessments": [...] } }`.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use mindcare_core::keys;
use mindcare_core::models::assessment::Assessment;
use mindcare_core::models::client::Client;
use mindcare_core::models::session::Session;

use crate::collections;
use crate::error::StorageError;
use crate::objects;

/// Format version written by this build. Bump when the shape changes.
pub const BACKUP_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    #[serde(default = "current_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<jiff::Timestamp>,
    pub data: BackupData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackupData {
    pub clients: Vec<Client>,
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
}

/// Record counts moved by an import or a clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub clients: usize,
    pub sessions: usize,
    pub assessments: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} clients, {} sessions, and {} assessments",
            self.clients, self.sessions, self.assessments
        )
    }
}

fn current_version() -> String {
    BACKUP_VERSION.to_string()
}

/// `mindcare-pro-backup-YYYY-MM-DD.json`
pub fn default_file_name(date: jiff::civil::Date) -> String {
    format!("mindcare-pro-backup-{date}.json")
}

/// Snapshot every collection.
pub fn export_backup(root: &Path) -> Result<Backup, StorageError> {
    Ok(Backup {
        version: current_version(),
        export_date: Some(jiff::Timestamp::now()),
        data: BackupData {
            clients: collections::list_clients(root)?,
            sessions: collections::list_sessions(root)?,
            assessments: collections::list_assessments(root)?,
        },
    })
}

/// Export every collection to a pretty-printed JSON file at `path`.
pub fn write_backup(root: &Path, path: &Path) -> Result<Summary, StorageError> {
    let backup = export_backup(root)?;
    let body = serde_json::to_vec_pretty(&backup)?;
    std::fs::write(path, body).map_err(|e| StorageError::Write {
        key: path.display().to_string(),
        source: e,
    })?;

    let summary = summarize(&backup.data);
    info!(path = %path.display(), %summary, "backup written");
    Ok(summary)
}

/// Parse and check a backup without touching storage.
///
/// `data.clients` must be present; missing `sessions` or `assessments`
/// are treated as empty. Versions newer than [`BACKUP_VERSION`] are
/// rejected, as are records that fail their structural checks.
pub fn parse_backup(json: &str) -> Result<Backup, StorageError> {
    let raw: serde_json::Value =
        serde_json::from_str(json).map_err(|e| StorageError::InvalidBackup(e.to_string()))?;

    let has_clients = raw
        .get("data")
        .and_then(|data| data.get("clients"))
        .is_some_and(|clients| !clients.is_null());
    if !has_clients {
        return Err(StorageError::InvalidBackup(
            "missing data.clients".to_string(),
        ));
    }

    if let Some(version) = raw.get("version").and_then(|v| v.as_str()) {
        check_version(version)?;
    }

    let backup: Backup =
        serde_json::from_value(raw).map_err(|e| StorageError::InvalidBackup(e.to_string()))?;

    unique_ids("client", backup.data.clients.iter().map(|c| c.id))?;
    unique_ids("session", backup.data.sessions.iter().map(|s| s.id))?;
    unique_ids("assessment", backup.data.assessments.iter().map(|a| a.id))?;

    for client in &backup.data.clients {
        client.validate()?;
    }
    for session in &backup.data.sessions {
        session.validate()?;
    }
    for assessment in &backup.data.assessments {
        assessment.validate()?;
    }

    Ok(backup)
}

fn check_version(version: &str) -> Result<(), StorageError> {
    let parse = |v: &str| -> Option<(u32, u32)> {
        match v.trim().split_once('.') {
            Some((major, minor)) => Some((major.parse().ok()?, minor.parse().ok()?)),
            None => Some((v.trim().parse().ok()?, 0)),
        }
    };

    let found = parse(version)
        .ok_or_else(|| StorageError::InvalidBackup(format!("unreadable version {version:?}")))?;
    let supported = parse(BACKUP_VERSION).unwrap_or_default();
    if found > supported {
        return Err(StorageError::UnsupportedBackupVersion {
            found: version.to_string(),
            supported: BACKUP_VERSION.to_string(),
        });
    }
    Ok(())
}

fn unique_ids(entity: &str, ids: impl Iterator<Item = Uuid>) -> Result<(), StorageError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StorageError::InvalidBackup(format!(
                "duplicate {entity} id {id}"
            )));
        }
    }
    Ok(())
}

/// Collections a backup covers.
const PREFIXES: [&str; 3] = [
    keys::CLIENTS_PREFIX,
    keys::SESSIONS_PREFIX,
    keys::ASSESSMENTS_PREFIX,
];

/// Staging directories under the store root start with this.
const STAGING_PREFIX: &str = ".import-";

/// Replace all stored data with the contents of a backup.
///
/// The backup is fully parsed and checked before anything is touched. Its
/// records are then written to a staging directory inside `root`, and each
/// collection directory is swapped in by rename. A write failure leaves the
/// existing data as it was. Assessment snapshots are restored as-is, not
/// recomputed.
pub fn import_backup(root: &Path, json: &str) -> Result<Summary, StorageError> {
    let backup = parse_backup(json)?;

    let staging = root.join(format!("{STAGING_PREFIX}{}", Uuid::new_v4()));
    let staged = stage_and_swap(root, &staging, &backup.data);
    if let Err(e) = std::fs::remove_dir_all(&staging)
        && e.kind() != std::io::ErrorKind::NotFound
    {
        tracing::warn!(path = %staging.display(), error = %e, "staging directory left behind");
    }
    staged?;

    let summary = summarize(&backup.data);
    info!(%summary, version = %backup.version, "backup imported");
    Ok(summary)
}

fn stage_and_swap(root: &Path, staging: &Path, data: &BackupData) -> Result<(), StorageError> {
    std::fs::create_dir_all(staging).map_err(|e| StorageError::Write {
        key: staging.display().to_string(),
        source: e,
    })?;

    for client in &data.clients {
        collections::put_client(staging, client)?;
    }
    for session in &data.sessions {
        collections::put_session(staging, session)?;
    }
    for assessment in &data.assessments {
        collections::insert_assessment(staging, assessment)?;
    }

    for prefix in PREFIXES {
        objects::replace_prefix(root, staging, prefix)?;
    }
    Ok(())
}

/// Delete every client, session and assessment.
///
/// Objects are removed one at a time, so an I/O error partway through
/// leaves some collections cleared and others intact.
pub fn clear_all(root: &Path) -> Result<Summary, StorageError> {
    let summary = Summary {
        clients: objects::delete_objects_by_prefix(root, keys::CLIENTS_PREFIX)?,
        sessions: objects::delete_objects_by_prefix(root, keys::SESSIONS_PREFIX)?,
        assessments: objects::delete_objects_by_prefix(root, keys::ASSESSMENTS_PREFIX)?,
    };
    info!(%summary, "all data cleared");
    Ok(summary)
}

fn summarize(data: &BackupData) -> Summary {
    Summary {
        clients: data.clients.len(),
        sessions: data.sessions.len(),
        assessments: data.assessments.len(),
    }
}
