use tracing::info;

use crate::modules::loyalty_history::core::mutation::{UpdatePayload, build_update};
use crate::modules::loyalty_history::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;

/// Returns how many rows the update touched. An id that matches nothing is
/// not an error.
pub async fn update_record(
    store: &dyn RecordStore,
    table: &str,
    record_id: &str,
    payload: UpdatePayload,
) -> Result<u64, ApplicationError> {
    let statement = build_update(table, record_id, payload)?;
    let rows_affected = store.apply_update(&statement).await?;

    info!(
        table = %statement.table,
        record_id,
        fields = statement.assignments.len(),
        rows_affected,
        "record updated"
    );
    Ok(rows_affected)
}
