use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::loyalty_history::use_cases::record_point_event::command::RecordPointEvent;
use crate::modules::loyalty_history::use_cases::record_point_event::handler::record_point_event;
use crate::shell::errors::graphql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RecordPointEventMutation;

#[Object]
impl RecordPointEventMutation {
    async fn record_point_event(
        &self,
        context: &Context<'_>,
        id: String,
        user_id: String,
        points: i64,
        date: Option<DateTime<Utc>>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let command = RecordPointEvent {
            id: Some(id),
            user_id: Some(user_id),
            points: Some(points),
            date,
        };
        let id = record_point_event(state.store.as_ref(), command)
            .await
            .map_err(graphql_error)?;
        Ok(ID(id))
    }
}
