use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Client {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: jiff::civil::Date,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub emergency_contact: EmergencyContact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_source: Option<String>,
    pub start_date: jiff::civil::Date,
    pub status: ClientStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClientStatus {
    Active,
    Inactive,
    Discharged,
}

impl Client {
    /// "First Last", as shown in lists and dashboards.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "Last, First", as shown in client pickers.
    pub fn sort_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Age in whole years on `today`. Not yet having reached this year's
    /// birthday counts as one year younger.
    pub fn age_on(&self, today: jiff::civil::Date) -> i16 {
        let dob = self.date_of_birth;
        let mut age = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        age
    }

    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Active
    }

    /// Case-insensitive substring match on "First Last" or the email.
    /// An empty query matches every client.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.full_name().to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
    }

    /// Structural checks for records that arrive from outside (imports).
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(CoreError::invalid(
                "client",
                self.id,
                "first and last name are required",
            ));
        }
        Ok(())
    }
}
