mod common;

use axum::http::{Method, StatusCode};
use common::{affected, app, date, send, timestamp};
use hrdesk::models::leave;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;

fn pending_leave() -> leave::Model {
    leave::Model {
        id: 3,
        employee_id: 1,
        leave_type: "Sick".to_string(),
        start_date: date(2024, 5, 6),
        end_date: date(2024, 5, 7),
        status: "Pending".to_string(),
        applied_on: timestamp(2024, 5, 1),
    }
}

#[tokio::test]
async fn test_apply_creates_pending_leave() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![pending_leave()]])
        .into_connection();

    let (status, body) = send(
        app(db),
        Method::POST,
        "/leaves",
        Some(json!({
            "employee_id": 1,
            "leave_type": "Sick",
            "start_date": "2024-05-06",
            "end_date": "2024-05-07"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let body = body.unwrap();
    assert_eq!(body["status"], json!("Pending"));
    assert_eq!(body["start_date"], json!("2024-05-06"));
}

#[tokio::test]
async fn test_approve_sets_exact_status() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([affected(1)])
        .into_connection();

    let (status, body) = send(app(db.clone()), Method::PUT, "/leave/approve/3", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, None);

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("UPDATE"));
    assert!(log.contains("Approved"));
}

#[tokio::test]
async fn test_reject_sets_exact_status() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([affected(1)])
        .into_connection();

    let (status, body) = send(app(db.clone()), Method::PUT, "/leave/reject/3", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, None);

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("Rejected"));
}

#[tokio::test]
async fn test_workflow_ignores_missing_ids() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([affected(0), affected(0), affected(0)])
        .into_connection();

    let (status, _) = send(app(db.clone()), Method::PUT, "/leave/approve/404", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(app(db.clone()), Method::PUT, "/leave/reject/404", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app(db), Method::DELETE, "/leave/cancel/404", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, None);
}

#[tokio::test]
async fn test_cancel_deletes_the_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([affected(1)])
        .into_connection();

    let (status, _) = send(app(db.clone()), Method::DELETE, "/leave/cancel/3", None).await;
    assert_eq!(status, StatusCode::OK);

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("DELETE FROM"));
}

#[tokio::test]
async fn test_update_missing_and_delete_message() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<leave::Model>::new()])
        .append_exec_results([affected(1)])
        .into_connection();

    let (status, body) = send(
        app(db.clone()),
        Method::PUT,
        "/leaves/404",
        Some(json!({"leave_type": "Casual"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Some(json!({"error": "Leave not found"})));

    let (status, body) = send(app(db), Method::DELETE, "/leaves/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!({"message": "Leave deleted successfully"})));
}

#[tokio::test]
async fn test_leaves_by_employee() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![pending_leave()]])
        .into_connection();

    let (status, body) = send(app(db), Method::GET, "/employees/1/leaves", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()[0]["id"], json!(3));
}
