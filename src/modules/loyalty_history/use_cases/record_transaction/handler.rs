use chrono::Utc;
use tracing::info;

use crate::modules::loyalty_history::core::mutation::ValidationError;
use crate::modules::loyalty_history::core::records::{NewTransactionEvent, required_text};
use crate::modules::loyalty_history::use_cases::errors::ApplicationError;
use crate::modules::loyalty_history::use_cases::record_transaction::command::RecordTransaction;
use crate::shared::infrastructure::record_store::RecordStore;

/// Returns the id the store generated for the transaction.
pub async fn record_transaction(
    store: &dyn RecordStore,
    command: RecordTransaction,
) -> Result<i64, ApplicationError> {
    let user_id = required_text("userId", command.user_id)?;
    let description = required_text("description", command.description)?;
    let points = command
        .points
        .ok_or(ValidationError::MissingRequiredField { field: "points" })?;

    let id = store
        .insert_transaction(NewTransactionEvent {
            user_id: user_id.clone(),
            description,
            points,
            date: command.date.unwrap_or_else(Utc::now),
        })
        .await?;

    info!(transaction_id = id, user_id = %user_id, points, "transaction recorded");
    Ok(id)
}
