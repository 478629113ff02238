mod common;

use axum::http::{Method, StatusCode};
use common::{affected, app, send};
use hrdesk::models::{department, employee};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;

fn engineering() -> department::Model {
    department::Model {
        id: 1,
        name: "Engineering".to_string(),
    }
}

#[tokio::test]
async fn test_create_returns_created_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![engineering()]])
        .into_connection();

    let (status, body) = send(
        app(db),
        Method::POST,
        "/departments",
        Some(json!({"name": "Engineering", "ignored": true})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, Some(json!({"id": 1, "name": "Engineering"})));
}

#[tokio::test]
async fn test_list_returns_all_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            engineering(),
            department::Model {
                id: 2,
                name: "Finance".to_string(),
            },
        ]])
        .into_connection();

    let (status, body) = send(app(db), Method::GET, "/departments", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        Some(json!([
            {"id": 1, "name": "Engineering"},
            {"id": 2, "name": "Finance"}
        ]))
    );
}

#[tokio::test]
async fn test_get_existing_and_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![engineering()], vec![]])
        .into_connection();

    let (status, body) = send(app(db.clone()), Method::GET, "/departments/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!({"id": 1, "name": "Engineering"})));

    let (status, body) = send(app(db), Method::GET, "/departments/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Some(json!({"error": "Department not found"})));
}

#[tokio::test]
async fn test_update_existing_and_missing() {
    let renamed = department::Model {
        id: 1,
        name: "Platform".to_string(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![renamed], vec![]])
        .into_connection();

    let (status, body) = send(
        app(db.clone()),
        Method::PUT,
        "/departments/1",
        Some(json!({"name": "Platform"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!({"id": 1, "name": "Platform"})));

    let (status, body) = send(
        app(db),
        Method::PUT,
        "/departments/42",
        Some(json!({"name": "Platform"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Some(json!({"error": "Department not found"})));
}

#[tokio::test]
async fn test_delete_existing_then_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([affected(1), affected(0)])
        .into_connection();

    let (status, body) = send(app(db.clone()), Method::DELETE, "/departments/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        Some(json!({"message": "Department deleted successfully"}))
    );

    let (status, body) = send(app(db), Method::DELETE, "/departments/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Some(json!({"error": "Department not found"})));
}

#[tokio::test]
async fn test_department_employees_can_be_empty() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<employee::Model>::new()])
        .into_connection();

    let (status, body) = send(app(db), Method::GET, "/departments/1/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!([])));
}
