use std::any::TypeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not found: {id:?}, context: {context}")]
    StateNotFound { id: TypeId, context: String },
    #[error("Command not found: {id:?}, context: {context}")]
    CommandNotFound { id: TypeId, context: String },
}

impl Error {
    pub fn state_not_found(id: TypeId, context: impl Into<String>) -> Self {
        Self::StateNotFound {
            id,
            context: context.into(),
        }
    }

    pub fn command_not_found(id: TypeId, context: impl Into<String>) -> Self {
        Self::CommandNotFound {
            id,
            context: context.into(),
        }
    }
}
