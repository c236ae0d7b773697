use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::loyalty_history::use_cases::delete_record::handler::delete_record;
use crate::shell::errors::graphql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteRecordMutation;

#[Object]
impl DeleteRecordMutation {
    /// Returns the number of rows removed.
    async fn delete_record(
        &self,
        context: &Context<'_>,
        table: String,
        record_id: String,
    ) -> GqlResult<u64> {
        let state = context.data_unchecked::<AppState>();
        delete_record(state.store.as_ref(), &table, &record_id)
            .await
            .map_err(graphql_error)
    }
}
