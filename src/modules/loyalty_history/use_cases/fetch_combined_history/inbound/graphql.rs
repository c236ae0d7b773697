use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::loyalty_history::core::history::HistoryEntry;
use crate::modules::loyalty_history::core::records::DateRange;
use crate::modules::loyalty_history::use_cases::errors::ApplicationError;
use crate::modules::loyalty_history::use_cases::fetch_combined_history::handler::fetch_combined_history;
use crate::shell::errors::graphql_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlHistoryEntry {
    pub kind: String,
    pub user_id: String,
    pub points: i64,
    pub date: String,
    pub id: Option<String>,
    pub description: Option<String>,
}

impl From<HistoryEntry> for GqlHistoryEntry {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            kind: entry.kind().as_str().to_string(),
            user_id: entry.user_id().to_string(),
            points: entry.points(),
            date: entry.date().to_string(),
            id: entry.id().map(str::to_string),
            description: entry.description().map(str::to_string),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Combined history of a user between two days (`YYYY-MM-DD`, inclusive).
    async fn combined_history(
        &self,
        context: &Context<'_>,
        user_id: String,
        from: String,
        to: String,
    ) -> GqlResult<Vec<GqlHistoryEntry>> {
        let state = context.data_unchecked::<AppState>();
        let range = DateRange::parse(Some(&from), Some(&to))
            .map_err(|e| graphql_error(ApplicationError::Validation(e)))?;
        let entries = fetch_combined_history(state.store.as_ref(), &user_id, Some(range))
            .await
            .map_err(graphql_error)?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    async fn full_history(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<Vec<GqlHistoryEntry>> {
        let state = context.data_unchecked::<AppState>();
        let entries = fetch_combined_history(state.store.as_ref(), &user_id, None)
            .await
            .map_err(graphql_error)?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
