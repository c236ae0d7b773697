use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::loyalty_history::use_cases::delete_record::handler::delete_record;
use crate::modules::loyalty_history::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecordResponse {
    pub message: String,
    pub rows_affected: u64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path((table, record_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApplicationError> {
    let rows_affected = delete_record(state.store.as_ref(), &table, &record_id).await?;

    Ok(Json(DeleteRecordResponse {
        message: format!("record removed from table {table}"),
        rows_affected,
    }))
}
