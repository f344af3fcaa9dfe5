use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate symptom id: {0}")]
    DuplicateSymptom(String),

    #[error("duplicate disorder id: {0}")]
    DuplicateDisorder(String),

    #[error("disorder '{disorder_id}' requires unknown symptom '{symptom_id}'")]
    UnknownSymptom {
        disorder_id: String,
        symptom_id: String,
    },

    #[error("disorder '{disorder_id}' lists symptom '{symptom_id}' more than once")]
    RepeatedRequirement {
        disorder_id: String,
        symptom_id: String,
    },

    #[error(
        "disorder '{disorder_id}' has minimum {minimum}, expected 1 to {required} required symptoms"
    )]
    InvalidMinimum {
        disorder_id: String,
        minimum: u32,
        required: usize,
    },

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
