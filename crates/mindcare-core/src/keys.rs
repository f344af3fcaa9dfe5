//! Storage key conventions.
//!
//! Pure string functions. These define the canonical layout of objects
//! under a MindCare data directory.

use uuid::Uuid;

pub const CLIENTS_PREFIX: &str = "clients/";
pub const SESSIONS_PREFIX: &str = "sessions/";
pub const ASSESSMENTS_PREFIX: &str = "assessments/";

pub fn client(id: Uuid) -> String {
    format!("{CLIENTS_PREFIX}{id}.json")
}

pub fn session(id: Uuid) -> String {
    format!("{SESSIONS_PREFIX}{id}.json")
}

pub fn assessment(id: Uuid) -> String {
    format!("{ASSESSMENTS_PREFIX}{id}.json")
}
