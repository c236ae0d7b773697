use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::loyalty_history::core::mutation::ValidationError;
use crate::modules::loyalty_history::use_cases::errors::ApplicationError;
use crate::modules::loyalty_history::use_cases::record_point_event::command::RecordPointEvent;
use crate::modules::loyalty_history::use_cases::record_point_event::handler::record_point_event;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPointEventBody {
    pub id: Option<String>,
    #[serde(alias = "iduser")]
    pub user_id: Option<String>,
    pub points: Option<i64>,
    pub date: Option<DateTime<Utc>>,
}

impl From<RecordPointEventBody> for RecordPointEvent {
    fn from(body: RecordPointEventBody) -> Self {
        Self {
            id: body.id,
            user_id: body.user_id,
            points: body.points,
            date: body.date,
        }
    }
}

#[derive(Serialize)]
pub struct RecordPointEventResponse {
    pub message: &'static str,
    pub id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecordPointEventBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(body) =
        body.map_err(|rejection| ValidationError::InvalidBody(rejection.body_text()))?;

    let id = record_point_event(state.store.as_ref(), body.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordPointEventResponse {
            message: "point event recorded",
            id,
        }),
    ))
}
