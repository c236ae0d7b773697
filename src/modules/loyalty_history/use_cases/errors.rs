use thiserror::Error;

use crate::modules::loyalty_history::core::mutation::ValidationError;
use crate::shared::infrastructure::record_store::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApplicationError {
    /// Message safe to hand back to a caller. Store details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApplicationError::Validation(err) => err.to_string(),
            ApplicationError::Store(_) => "internal error while accessing the record store".into(),
        }
    }
}
