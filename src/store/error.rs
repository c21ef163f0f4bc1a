use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Item text was empty or whitespace-only
    #[error("Content text cannot be empty")]
    Validation,

    /// Every item id has been handed out
    #[error("No item ids left to assign")]
    IdsExhausted,

    /// The persistence provider rejected a write
    #[error("Failed to persist '{key}': {source}")]
    Persistence {
        key: String,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation)
    }
}
