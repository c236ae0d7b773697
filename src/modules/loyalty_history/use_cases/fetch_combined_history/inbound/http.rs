use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::loyalty_history::core::history::HistoryEntry;
use crate::modules::loyalty_history::core::mutation::ValidationError;
use crate::modules::loyalty_history::core::records::DateRange;
use crate::modules::loyalty_history::use_cases::errors::ApplicationError;
use crate::modules::loyalty_history::use_cases::fetch_combined_history::handler::fetch_combined_history;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct HistoryRangeParams {
    #[serde(alias = "dataInicio")]
    pub from: Option<String>,
    #[serde(alias = "dataFim")]
    pub to: Option<String>,
}

/// Flat wire shape of one history entry; fields that do not apply to the
/// entry's kind are `null`.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryResponse {
    pub kind: &'static str,
    pub user_id: String,
    pub points: i64,
    pub date: String,
    pub id: Option<String>,
    pub description: Option<String>,
}

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(entry: HistoryEntry) -> Self {
        let kind = entry.kind().as_str();
        match entry {
            HistoryEntry::Point {
                id,
                user_id,
                points,
                date,
            } => Self {
                kind,
                user_id,
                points,
                date,
                id: Some(id),
                description: None,
            },
            HistoryEntry::Transaction {
                user_id,
                description,
                points,
                date,
            } => Self {
                kind,
                user_id,
                points,
                date,
                id: None,
                description: Some(description),
            },
        }
    }
}

fn to_response(entries: Vec<HistoryEntry>) -> Json<Vec<HistoryEntryResponse>> {
    Json(entries.into_iter().map(Into::into).collect())
}

pub async fn handle_range(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    params: Result<Query<HistoryRangeParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Query(params) =
        params.map_err(|rejection| ValidationError::InvalidQuery(rejection.body_text()))?;
    let range = DateRange::parse(params.from.as_deref(), params.to.as_deref())?;
    let entries = fetch_combined_history(state.store.as_ref(), &user_id, Some(range)).await?;
    Ok(to_response(entries))
}

pub async fn handle_all(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let entries = fetch_combined_history(state.store.as_ref(), &user_id, None).await?;
    Ok(to_response(entries))
}
