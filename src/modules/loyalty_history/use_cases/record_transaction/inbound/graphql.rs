use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::loyalty_history::use_cases::record_transaction::command::RecordTransaction;
use crate::modules::loyalty_history::use_cases::record_transaction::handler::record_transaction;
use crate::shell::errors::graphql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RecordTransactionMutation;

#[Object]
impl RecordTransactionMutation {
    async fn record_transaction(
        &self,
        context: &Context<'_>,
        user_id: String,
        description: String,
        points: i64,
        date: Option<DateTime<Utc>>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let command = RecordTransaction {
            user_id: Some(user_id),
            description: Some(description),
            points: Some(points),
            date,
        };
        let id = record_transaction(state.store.as_ref(), command)
            .await
            .map_err(graphql_error)?;
        Ok(ID(id.to_string()))
    }
}
