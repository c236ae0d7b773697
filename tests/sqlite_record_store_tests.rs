// Integration tests for the SQLite record store.
//
// Every test runs against a fresh `sqlite::memory:` database. The pool holds a
// single connection so all statements see the same in-memory database.

use std::sync::Arc;

use axum::{body::Body, http::Request, http::StatusCode};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use loyalty_history::modules::loyalty_history::core::mutation::{
    UpdatePayload, build_delete, build_update,
};
use loyalty_history::modules::loyalty_history::core::records::{
    DateRange, NewPointEvent, NewTransactionEvent,
};
use loyalty_history::shared::infrastructure::record_store::sqlite::SqliteRecordStore;
use loyalty_history::shared::infrastructure::record_store::{RecordStore, StoreError};
use loyalty_history::shell::http::router;
use loyalty_history::shell::state::AppState;

#[fixture]
async fn store() -> SqliteRecordStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let store = SqliteRecordStore::new(pool);
    store.init().await.unwrap();
    store
}

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
}

fn point(id: &str, user_id: &str, points: i64, date: DateTime<Utc>) -> NewPointEvent {
    NewPointEvent {
        id: id.into(),
        user_id: user_id.into(),
        points,
        date,
    }
}

fn transaction(
    user_id: &str,
    description: &str,
    points: i64,
    date: DateTime<Utc>,
) -> NewTransactionEvent {
    NewTransactionEvent {
        user_id: user_id.into(),
        description: description.into(),
        points,
        date,
    }
}

fn may(from: u32, to: u32) -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2024, 5, from).unwrap(),
        NaiveDate::from_ymd_opt(2024, 5, to).unwrap(),
    )
}

#[rstest]
#[tokio::test]
async fn it_should_return_rows_in_insertion_order(#[future] store: SqliteRecordStore) {
    let store = store.await;
    store.insert_point(point("b2", "u1", 20, at(2, 8))).await.unwrap();
    store.insert_point(point("a1", "u1", 10, at(1, 8))).await.unwrap();
    store.insert_point(point("c3", "u2", 30, at(1, 8))).await.unwrap();

    let rows = store.points_for_user("u1", None).await.unwrap();

    let ids: Vec<_> = rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, ["b2", "a1"]);
    assert_eq!(rows[0].date, "2024-05-02 08:00:00.000");
}

#[rstest]
#[tokio::test]
async fn it_should_generate_transaction_ids(#[future] store: SqliteRecordStore) {
    let store = store.await;

    let first = store
        .insert_transaction(transaction("u1", "redeem", 5, at(1, 8)))
        .await
        .unwrap();
    let second = store
        .insert_transaction(transaction("u1", "redeem", 7, at(1, 9)))
        .await
        .unwrap();

    assert_eq!((first, second), (1, 2));
    let rows = store.transactions_for_user("u1", None).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].points, 7);
}

#[rstest]
#[tokio::test]
async fn it_should_include_the_whole_last_day_of_a_range(#[future] store: SqliteRecordStore) {
    let store = store.await;
    store.insert_point(point("early", "u1", 1, at(1, 0))).await.unwrap();
    store.insert_point(point("late", "u1", 2, at(2, 23))).await.unwrap();
    store.insert_point(point("after", "u1", 3, at(3, 0))).await.unwrap();
    store
        .insert_transaction(transaction("u1", "redeem", 5, at(2, 12)))
        .await
        .unwrap();

    let points = store.points_for_user("u1", Some(may(1, 2))).await.unwrap();
    let transactions = store
        .transactions_for_user("u1", Some(may(3, 4)))
        .await
        .unwrap();

    let ids: Vec<_> = points.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, ["early", "late"]);
    assert!(transactions.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_update_only_the_given_columns(#[future] store: SqliteRecordStore) {
    let store = store.await;
    let id = store
        .insert_transaction(transaction("u1", "redeem", 5, at(1, 8)))
        .await
        .unwrap();

    let statement = build_update(
        "histtransactions",
        &id.to_string(),
        UpdatePayload {
            points: None,
            description: Some("refund".into()),
        },
    )
    .unwrap();
    let affected = store.apply_update(&statement).await.unwrap();

    assert_eq!(affected, 1);
    let rows = store.transactions_for_user("u1", None).await.unwrap();
    assert_eq!(rows[0].description, "refund");
    assert_eq!(rows[0].points, 5);
}

#[rstest]
#[tokio::test]
async fn it_should_report_zero_rows_for_an_unknown_id(#[future] store: SqliteRecordStore) {
    let store = store.await;

    let update = build_update(
        "histPoints",
        "missing",
        UpdatePayload {
            points: Some(1),
            description: None,
        },
    )
    .unwrap();
    let delete = build_delete("histtransactions", "42").unwrap();

    assert_eq!(store.apply_update(&update).await.unwrap(), 0);
    assert_eq!(store.apply_delete(&delete).await.unwrap(), 0);
}

#[rstest]
#[tokio::test]
async fn it_should_address_transactions_by_their_integer_id(#[future] store: SqliteRecordStore) {
    let store = store.await;
    store
        .insert_transaction(transaction("u1", "mug", 5, at(1, 8)))
        .await
        .unwrap();
    let update = build_update(
        "histtransactions",
        "01",
        UpdatePayload {
            points: Some(9),
            description: None,
        },
    )
    .unwrap();

    assert_eq!(store.apply_update(&update).await.unwrap(), 1);
    assert_eq!(store.transactions_for_user("u1", None).await.unwrap()[0].points, 9);

    let delete = build_delete("histtransactions", "01").unwrap();
    assert_eq!(store.apply_delete(&delete).await.unwrap(), 1);
    assert!(store.transactions_for_user("u1", None).await.unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_delete_by_id(#[future] store: SqliteRecordStore) {
    let store = store.await;
    store.insert_point(point("a1", "u1", 10, at(1, 8))).await.unwrap();
    store.insert_point(point("a2", "u1", 20, at(1, 9))).await.unwrap();

    let affected = store
        .apply_delete(&build_delete("histPoints", "a1").unwrap())
        .await
        .unwrap();

    assert_eq!(affected, 1);
    let rows = store.points_for_user("u1", None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "a2");
}

#[rstest]
#[tokio::test]
async fn it_should_reject_a_duplicate_point_id(#[future] store: SqliteRecordStore) {
    let store = store.await;
    store.insert_point(point("a1", "u1", 10, at(1, 8))).await.unwrap();

    let result = store.insert_point(point("a1", "u2", 5, at(1, 9))).await;

    assert!(matches!(result, Err(StoreError::ConstraintViolation(_))));
}

#[rstest]
#[tokio::test]
async fn it_should_answer_the_health_probe(#[future] store: SqliteRecordStore) {
    let store = store.await;
    assert!(store.ping().await.is_ok());

    store.pool().close().await;
    assert!(matches!(store.ping().await, Err(StoreError::Unavailable(_))));
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_combined_history_over_http(#[future] store: SqliteRecordStore) {
    let app = router(AppState::new(Arc::new(store.await)));

    for (uri, body) in [
        (
            "/history/points",
            json!({ "id": "a1", "userId": "u1", "points": 10, "date": "2024-05-01T10:00:00Z" }),
        ),
        (
            "/history/transactions",
            json!({ "userId": "u1", "description": "redeem", "points": 5, "date": "2024-05-01T09:00:00Z" }),
        ),
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::get("/history/users/u1?from=2024-05-01&to=2024-05-01")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let history: Value = serde_json::from_slice(&bytes).unwrap();
    let kinds: Vec<_> = history
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| (entry["kind"].as_str().unwrap(), entry["points"].as_i64().unwrap()))
        .collect();
    assert_eq!(kinds, [("point", 10), ("transaction", 5)]);
}
