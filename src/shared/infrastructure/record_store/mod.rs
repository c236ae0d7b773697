// Port for the relational store holding `histPoints` and `histtransactions`.
//
// Adapters
// - `sqlite`: sqlx pool, one per process, injected through the shell state.
// - `in_memory`: for tests and local development, with an offline toggle.

pub mod in_memory;
pub mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::loyalty_history::core::mutation::{DeleteStatement, UpdateStatement};
use crate::modules::loyalty_history::core::records::{
    DateRange, NewPointEvent, NewTransactionEvent, PointEvent, TransactionEvent,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("stored row is malformed: {0}")]
    DataIntegrity(String),

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::ConstraintViolation(format!("unique constraint violation: {db_err}"))
            }
            sqlx::Error::Database(db_err) if db_err.is_check_violation() => {
                Self::ConstraintViolation(format!("check constraint violation: {db_err}"))
            }
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_) => Self::DataIntegrity(err.to_string()),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable(err.to_string())
            }
            _ => Self::Backend(err.to_string()),
        }
    }
}

/// Reads return rows in insertion order. Writes report the number of rows
/// they touched; zero is not an error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert_point(&self, point: NewPointEvent) -> Result<(), StoreError>;

    /// Returns the store-generated transaction id.
    async fn insert_transaction(&self, transaction: NewTransactionEvent)
    -> Result<i64, StoreError>;

    async fn points_for_user(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<PointEvent>, StoreError>;

    async fn transactions_for_user(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<TransactionEvent>, StoreError>;

    async fn apply_update(&self, statement: &UpdateStatement) -> Result<u64, StoreError>;

    async fn apply_delete(&self, statement: &DeleteStatement) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
