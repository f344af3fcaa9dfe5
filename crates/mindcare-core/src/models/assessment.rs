use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A saved DSM-5 symptom review. Written once and never updated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub date: jiff::civil::Date,
    pub selected_symptoms: BTreeSet<String>,
    /// Matcher output at save time, kept verbatim.
    pub suggested_disorders: Vec<SuggestedDisorder>,
    pub clinician_notes: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// One ranked candidate produced by the disorder matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SuggestedDisorder {
    pub disorder_id: String,
    pub name: String,
    pub code: String,
    /// Selected ids that are also required by the disorder, in the
    /// disorder's own order.
    pub matched_symptoms: Vec<String>,
    pub total_required: u32,
    /// Zero in snapshots imported from backups that did not record it.
    #[serde(default)]
    pub minimum_required: u32,
    pub confidence: Confidence,
    /// 0–100.
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    Low,
    Moderate,
    High,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Assessment {
    /// The highest-ranked suggestion, if any symptom matched at all.
    pub fn top_suggestion(&self) -> Option<&SuggestedDisorder> {
        self.suggested_disorders.first()
    }

    /// Structural checks for records that arrive from outside (imports).
    /// The snapshot must be consistent with the selection it claims to
    /// come from.
    pub fn validate(&self) -> Result<(), CoreError> {
        for suggestion in &self.suggested_disorders {
            if suggestion.percentage > 100 {
                return Err(CoreError::invalid(
                    "assessment",
                    self.id,
                    format!(
                        "{} has percentage {} above 100",
                        suggestion.disorder_id, suggestion.percentage
                    ),
                ));
            }
            if let Some(stray) = suggestion
                .matched_symptoms
                .iter()
                .find(|id| !self.selected_symptoms.contains(*id))
            {
                return Err(CoreError::invalid(
                    "assessment",
                    self.id,
                    format!(
                        "{} lists matched symptom '{stray}' that was not selected",
                        suggestion.disorder_id
                    ),
                ));
            }
        }

        let sorted = self
            .suggested_disorders
            .windows(2)
            .all(|pair| pair[0].percentage >= pair[1].percentage);
        if !sorted {
            return Err(CoreError::invalid(
                "assessment",
                self.id,
                "suggested disorders are not ranked by percentage",
            ));
        }
        Ok(())
    }
}
