mod common;

use axum::http::{Method, StatusCode};
use common::{affected, app, date, send, timestamp};
use hrdesk::models::{attendance_log, employee, project};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;

fn grace() -> employee::Model {
    employee::Model {
        id: 2,
        name: "Grace".to_string(),
        email: "grace@x.com".to_string(),
        phone: Some("555-0101".to_string()),
        date_of_joining: Some(date(2023, 6, 1)),
        department_id: Some(1),
        designation: Some("Engineer".to_string()),
        salary: Some(90000.0),
        pf_enabled: true,
        tds_enabled: true,
        status: "Active".to_string(),
        created_at: timestamp(2023, 6, 1),
    }
}

#[tokio::test]
async fn test_missing_attendance_uses_anti_join() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![grace()]])
        .into_connection();

    let (status, body) = send(
        app(db.clone()),
        Method::GET,
        "/attendance/missing/2024-04-02",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["email"], json!("grace@x.com"));
    assert_eq!(rows[0]["date_of_joining"], json!("2023-06-01"));

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("NOT IN (SELECT"));
    assert!(log.contains("attendance_logs"));
    assert!(log.contains("2024-04-02"));
}

#[tokio::test]
async fn test_missing_attendance_rejects_bad_date() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let (status, _) = send(app(db), Method::GET, "/attendance/missing/yesterday", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_in_only_row_round_trip() {
    let row = attendance_log::Model {
        id: 5,
        employee_id: 2,
        date: date(2024, 4, 2),
        check_in: chrono::NaiveTime::from_hms_opt(8, 55, 0),
        check_out: None,
        status: None,
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row.clone()], vec![row]])
        .into_connection();

    let (status, created) = send(
        app(db.clone()),
        Method::POST,
        "/attendance",
        Some(json!({"employee_id": 2, "date": "2024-04-02", "check_in": "08:55:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, fetched) = send(app(db), Method::GET, "/attendance/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, fetched);
    assert_eq!(fetched.unwrap()["check_out"], json!(null));
}

#[tokio::test]
async fn test_attendance_delete_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([affected(0)])
        .into_connection();

    let (status, body) = send(app(db), Method::DELETE, "/attendance/8", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Some(json!({"error": "Attendance log not found"})));
}

#[tokio::test]
async fn test_assigned_projects_join_through_assignments() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![project::Model {
            id: 2,
            name: "Payroll revamp".to_string(),
            client: Some("Acme".to_string()),
        }]])
        .into_connection();

    let (status, body) = send(app(db.clone()), Method::GET, "/projects/assigned/2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        Some(json!([{"id": 2, "name": "Payroll revamp", "client": "Acme"}]))
    );

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("INNER JOIN"));
    assert!(log.contains("project_assignments"));
}

#[tokio::test]
async fn test_project_crud_messages() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<project::Model>::new()])
        .append_exec_results([affected(1)])
        .into_connection();

    let (status, body) = send(app(db.clone()), Method::GET, "/projects/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Some(json!({"error": "Project not found"})));

    let (status, body) = send(app(db), Method::DELETE, "/projects/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!({"message": "Project deleted successfully"})));
}
