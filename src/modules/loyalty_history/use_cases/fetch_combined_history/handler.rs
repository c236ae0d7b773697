use tracing::debug;

use crate::modules::loyalty_history::core::history::{HistoryEntry, merge_and_sort};
use crate::modules::loyalty_history::core::records::DateRange;
use crate::modules::loyalty_history::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;

/// Both tables are queried concurrently; ordering comes from the merge alone.
pub async fn fetch_combined_history(
    store: &dyn RecordStore,
    user_id: &str,
    range: Option<DateRange>,
) -> Result<Vec<HistoryEntry>, ApplicationError> {
    let (points, transactions) = tokio::try_join!(
        store.points_for_user(user_id, range),
        store.transactions_for_user(user_id, range)
    )?;

    let entries = merge_and_sort(points, transactions);
    debug!(user_id, entries = entries.len(), ranged = range.is_some(), "combined history fetched");
    Ok(entries)
}
