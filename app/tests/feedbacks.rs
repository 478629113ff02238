mod common;

use axum::http::{Method, StatusCode};
use common::{affected, app, send, timestamp};
use hrdesk::models::feedback;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;

fn kudos(message: &str) -> feedback::Model {
    feedback::Model {
        id: 4,
        from_employee: 1,
        to_employee: 2,
        message: message.to_string(),
        submitted_on: timestamp(2024, 3, 1),
    }
}

#[tokio::test]
async fn test_create_and_get_feedback() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![kudos("Great demo")], vec![kudos("Great demo")], vec![]])
        .into_connection();

    let (status, body) = send(
        app(db.clone()),
        Method::POST,
        "/feedbacks",
        Some(json!({"from_employee": 1, "to_employee": 2, "message": "Great demo"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        Some(json!({
            "id": 4,
            "from_employee": 1,
            "to_employee": 2,
            "message": "Great demo",
            "submitted_on": "2024-03-01T09:00:00"
        }))
    );

    let (status, body) = send(app(db.clone()), Method::GET, "/feedbacks/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["message"], json!("Great demo"));

    let (status, body) = send(app(db), Method::GET, "/feedbacks/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Some(json!({"error": "Feedback not found"})));
}

#[tokio::test]
async fn test_update_feedback_existing_and_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![kudos("Great demo, thanks")], vec![]])
        .into_connection();

    let (status, body) = send(
        app(db.clone()),
        Method::PUT,
        "/feedbacks/4",
        Some(json!({"message": "Great demo, thanks"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["message"], json!("Great demo, thanks"));

    let (status, body) = send(
        app(db),
        Method::PUT,
        "/feedbacks/9",
        Some(json!({"message": "Anyone there?"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Some(json!({"error": "Feedback not found"})));
}

#[tokio::test]
async fn test_delete_feedback_existing_and_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([affected(1), affected(0)])
        .into_connection();

    let (status, body) = send(app(db.clone()), Method::DELETE, "/feedbacks/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!({"message": "Feedback deleted successfully"})));

    let (status, body) = send(app(db), Method::DELETE, "/feedbacks/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Some(json!({"error": "Feedback not found"})));
}
