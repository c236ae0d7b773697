use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::loyalty_history::core::mutation::{UpdatePayload, ValidationError};
use crate::modules::loyalty_history::use_cases::errors::ApplicationError;
use crate::modules::loyalty_history::use_cases::update_record::handler::update_record;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct UpdateRecordBody {
    pub points: Option<i64>,
    pub description: Option<String>,
}

impl From<UpdateRecordBody> for UpdatePayload {
    fn from(body: UpdateRecordBody) -> Self {
        Self {
            points: body.points,
            description: body.description,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordResponse {
    pub message: String,
    pub rows_affected: u64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path((table, record_id)): Path<(String, String)>,
    body: Result<Json<UpdateRecordBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(body) =
        body.map_err(|rejection| ValidationError::InvalidBody(rejection.body_text()))?;

    let rows_affected =
        update_record(state.store.as_ref(), &table, &record_id, body.into()).await?;

    Ok(Json(UpdateRecordResponse {
        message: format!("record updated in table {table}"),
        rows_affected,
    }))
}
