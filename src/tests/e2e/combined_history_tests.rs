use axum::{Router, body::Body, http::Request, http::StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::http::read_json;
use crate::tests::fixtures::state::make_test_state;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn lists_points_and_transactions_newest_first() {
    let (state, _) = make_test_state();
    let app = router(state);

    let (status, _) = send(
        &app,
        post(
            "/history/points",
            json!({ "id": "a1", "userId": "u1", "points": 10, "date": "2024-05-01T10:00:00Z" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, created) = send(
        &app,
        post(
            "/history/transactions",
            json!({ "userId": "u1", "description": "redeem", "points": 5, "date": "2024-05-01T09:00:00Z" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, history) = send(&app, get("/history/users/u1/all")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        history,
        json!([
            {
                "kind": "point",
                "userId": "u1",
                "points": 10,
                "date": "2024-05-01 10:00:00.000",
                "id": "a1",
                "description": null
            },
            {
                "kind": "transaction",
                "userId": "u1",
                "points": 5,
                "date": "2024-05-01 09:00:00.000",
                "id": null,
                "description": "redeem"
            }
        ])
    );

    let (_, again) = send(&app, get("/history/users/u1/all")).await;
    assert_eq!(again, history);

    let (status, ranged) = send(
        &app,
        get("/history/users/u1?from=2024-05-01&to=2024-05-01"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ranged, history);
}

#[tokio::test]
async fn updates_and_deletes_show_up_in_the_history() {
    let (state, _) = make_test_state();
    let app = router(state);

    send(
        &app,
        post(
            "/history/points",
            json!({ "id": "a1", "userId": "u1", "points": 10, "date": "2024-05-01T10:00:00Z" }),
        ),
    )
    .await;
    send(
        &app,
        post(
            "/history/transactions",
            json!({ "userId": "u1", "description": "redeem", "points": 5, "date": "2024-05-02T10:00:00Z" }),
        ),
    )
    .await;

    let (status, updated) = send(
        &app,
        Request::put("/history/histtransactions/1")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"description":"refund"}"#))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["rowsAffected"], 1);

    let (status, deleted) = send(
        &app,
        Request::delete("/history/histPoints/a1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["rowsAffected"], 1);

    let (_, history) = send(&app, get("/history/users/u1/all")).await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["kind"], "transaction");
    assert_eq!(history[0]["description"], "refund");
    assert_eq!(history[0]["points"], 5);
}

#[tokio::test]
async fn rejects_a_history_request_without_a_range() {
    let (state, _) = make_test_state();
    let app = router(state);

    let (status, body) = send(&app, get("/history/users/u1?from=2024-05-01")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "provide from and to as YYYY-MM-DD");
}
