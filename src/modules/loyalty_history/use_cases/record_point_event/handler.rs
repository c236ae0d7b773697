use chrono::Utc;
use tracing::info;

use crate::modules::loyalty_history::core::mutation::ValidationError;
use crate::modules::loyalty_history::core::records::{NewPointEvent, required_text};
use crate::modules::loyalty_history::use_cases::errors::ApplicationError;
use crate::modules::loyalty_history::use_cases::record_point_event::command::RecordPointEvent;
use crate::shared::infrastructure::record_store::RecordStore;

/// Returns the id of the stored point event.
pub async fn record_point_event(
    store: &dyn RecordStore,
    command: RecordPointEvent,
) -> Result<String, ApplicationError> {
    let id = required_text("id", command.id)?;
    let user_id = required_text("userId", command.user_id)?;
    let points = command
        .points
        .ok_or(ValidationError::MissingRequiredField { field: "points" })?;

    store
        .insert_point(NewPointEvent {
            id: id.clone(),
            user_id: user_id.clone(),
            points,
            date: command.date.unwrap_or_else(Utc::now),
        })
        .await?;

    info!(point_id = %id, user_id = %user_id, points, "point event recorded");
    Ok(id)
}
