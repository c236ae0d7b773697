use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::loyalty_history::core::mutation::ValidationError;
use crate::modules::loyalty_history::use_cases::errors::ApplicationError;
use crate::modules::loyalty_history::use_cases::record_transaction::command::RecordTransaction;
use crate::modules::loyalty_history::use_cases::record_transaction::handler::record_transaction;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTransactionBody {
    #[serde(alias = "iduser")]
    pub user_id: Option<String>,
    pub description: Option<String>,
    pub points: Option<i64>,
    pub date: Option<DateTime<Utc>>,
}

impl From<RecordTransactionBody> for RecordTransaction {
    fn from(body: RecordTransactionBody) -> Self {
        Self {
            user_id: body.user_id,
            description: body.description,
            points: body.points,
            date: body.date,
        }
    }
}

#[derive(Serialize)]
pub struct RecordTransactionResponse {
    pub message: &'static str,
    pub id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecordTransactionBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(body) =
        body.map_err(|rejection| ValidationError::InvalidBody(rejection.body_text()))?;

    let id = record_transaction(state.store.as_ref(), body.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordTransactionResponse {
            message: "transaction recorded",
            id,
        }),
    ))
}
