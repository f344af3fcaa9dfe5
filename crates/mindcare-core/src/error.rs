use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid {entity} {id}: {message}")]
    Invalid {
        entity: &'static str,
        id: Uuid,
        message: String,
    },
}

impl CoreError {
    pub(crate) fn invalid(entity: &'static str, id: Uuid, message: impl Into<String>) -> Self {
        Self::Invalid {
            entity,
            id,
            message: message.into(),
        }
    }
}
