use tracing::info;

use crate::modules::loyalty_history::core::mutation::build_delete;
use crate::modules::loyalty_history::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;

pub async fn delete_record(
    store: &dyn RecordStore,
    table: &str,
    record_id: &str,
) -> Result<u64, ApplicationError> {
    let statement = build_delete(table, record_id)?;
    let rows_affected = store.apply_delete(&statement).await?;

    info!(table = %statement.table, record_id, rows_affected, "record deleted");
    Ok(rows_affected)
}
