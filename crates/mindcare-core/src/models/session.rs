use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Valid range for the clinician-rated mood score.
pub const MOOD_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// A single therapy session, with its progress note.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Session {
    pub id: Uuid,
    pub client_id: Uuid,
    pub date: jiff::civil::Date,
    /// Wall-clock start, "HH:MM".
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Minutes.
    pub duration: u32,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub status: SessionStatus,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interventions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homework: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SessionType {
    Initial,
    FollowUp,
    Crisis,
    Family,
    Group,
    Telehealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    None,
    Low,
    Moderate,
    High,
}

impl Session {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(mood) = self.mood
            && !MOOD_RANGE.contains(&mood)
        {
            return Err(CoreError::invalid(
                "session",
                self.id,
                format!(
                    "mood {mood} is outside range [{}, {}]",
                    MOOD_RANGE.start(),
                    MOOD_RANGE.end()
                ),
            ));
        }
        Ok(())
    }
}
