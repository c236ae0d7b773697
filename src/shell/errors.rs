use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

use crate::modules::loyalty_history::use_cases::errors::ApplicationError;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApplicationError {
    fn log(&self) {
        match self {
            ApplicationError::Validation(err) => warn!(error = %err, "request rejected"),
            ApplicationError::Store(err) => error!(error = %err, "record store failure"),
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        self.log();
        let status = match self {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn graphql_error(err: ApplicationError) -> async_graphql::Error {
    err.log();
    async_graphql::Error::new(err.public_message())
}
