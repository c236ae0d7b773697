use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::error;
use uuid::Uuid;

use crate::modules::loyalty_history::use_cases::delete_record::inbound::http as delete_http;
use crate::modules::loyalty_history::use_cases::fetch_combined_history::inbound::http as history_http;
use crate::modules::loyalty_history::use_cases::record_point_event::inbound::http as point_http;
use crate::modules::loyalty_history::use_cases::record_transaction::inbound::http as transaction_http;
use crate::modules::loyalty_history::use_cases::update_record::inbound::http as update_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn router(state: AppState) -> Router {
    router_with_timeout(state, DEFAULT_REQUEST_TIMEOUT)
}

pub fn router_with_timeout(state: AppState, request_timeout: Duration) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/history/points", post(point_http::handle))
        .route("/history/transactions", post(transaction_http::handle))
        .route("/history/users/{user_id}", get(history_http::handle_range))
        .route("/history/users/{user_id}/all", get(history_http::handle_all))
        .route(
            "/history/{table}/{record_id}",
            put(update_http::handle).delete(delete_http::handle),
        )
        .merge(graphql::router(schema))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(inject_request_id))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(err) => {
            error!(error = %err, "health probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}

async fn inject_request_id(req: Request, next: Next) -> Response {
    let request_id = Uuid::now_v7().to_string();

    let mut req = req;
    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;
    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
