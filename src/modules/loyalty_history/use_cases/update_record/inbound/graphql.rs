use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::loyalty_history::core::mutation::UpdatePayload;
use crate::modules::loyalty_history::use_cases::update_record::handler::update_record;
use crate::shell::errors::graphql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateRecordMutation;

#[Object]
impl UpdateRecordMutation {
    /// Returns the number of rows updated.
    async fn update_record(
        &self,
        context: &Context<'_>,
        table: String,
        record_id: String,
        points: Option<i64>,
        description: Option<String>,
    ) -> GqlResult<u64> {
        let state = context.data_unchecked::<AppState>();
        let payload = UpdatePayload {
            points,
            description,
        };
        update_record(state.store.as_ref(), &table, &record_id, payload)
            .await
            .map_err(graphql_error)
    }
}
