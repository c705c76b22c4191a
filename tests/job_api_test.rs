mod common;

use axum::http::StatusCode;
use common::{request, seed_employee, seed_job, setup_test_app, setup_test_db};
use serde_json::json;

#[tokio::test]
async fn created_job_carries_its_employee_summary() {
    let db = setup_test_db().await.expect("db setup failed");
    let employee_id = seed_employee(&db, "Eve", "Santos", "eve@example.com", None, None).await;
    let app = setup_test_app(db);

    let (status, _, created) = request(
        &app,
        "POST",
        "/api/jobs",
        Some(json!({
            "jobTitle": "Analyst",
            "jobDescription": "Quarterly reporting",
            "jobHours": 160,
            "employeeId": employee_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["employeeId"], employee_id);
    assert_eq!(created["employee"]["firstName"], "Eve");
    assert_eq!(created["employee"]["lastName"], "Santos");
    // The summary is flattened: no department, no nested jobs.
    assert!(created["employee"].get("department").is_none());
}

#[tokio::test]
async fn patch_with_only_description_leaves_title_and_hours() {
    let db = setup_test_db().await.expect("db setup failed");
    let id = seed_job(&db, "Analyst", "Quarterly reporting", Some(160), None).await;
    let app = setup_test_app(db);

    let (status, _, body) = request(
        &app,
        "PATCH",
        &format!("/api/jobs/{id}"),
        Some(json!({"id": id, "jobDescription": "Annual reporting"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jobDescription"], "Annual reporting");
    assert_eq!(body["jobTitle"], "Analyst");
    assert_eq!(body["jobHours"], 160);
}

#[tokio::test]
async fn jobs_of_one_employee_are_listed_by_foreign_key() {
    let db = setup_test_db().await.expect("db setup failed");
    let eve = seed_employee(&db, "Eve", "Santos", "eve@example.com", None, None).await;
    let mark = seed_employee(&db, "Mark", "Hall", "mark@example.com", None, None).await;
    seed_job(&db, "Analyst", "Reports", Some(160), Some(eve)).await;
    seed_job(&db, "Auditor", "Audits", Some(80), Some(eve)).await;
    seed_job(&db, "Clerk", "Files", Some(40), Some(mark)).await;
    let app = setup_test_app(db);

    let (status, _, body) = request(&app, "GET", &format!("/api/jobs/employee/{eve}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("body is not an array");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|j| j["employeeId"] == eve));
}

#[tokio::test]
async fn list_pages_and_counts_jobs() {
    let db = setup_test_db().await.expect("db setup failed");
    for i in 0..15 {
        seed_job(&db, &format!("Job {i}"), "desc", Some(i), None).await;
    }
    let app = setup_test_app(db);

    let (status, headers, body) = request(&app, "GET", "/api/jobs?page=1&size=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("X-Total-Count").and_then(|v| v.to_str().ok()),
        Some("15")
    );
    assert_eq!(body.as_array().map(Vec::len), Some(5));

    let (status, _, body) = request(&app, "GET", "/api/jobs?page=5&size=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn deleting_a_referenced_employee_is_a_constraint_violation() {
    // No cascade is configured; detaching orphaned jobs is the caller's
    // responsibility, and the store's foreign key rejects anything else.
    let db = setup_test_db().await.expect("db setup failed");
    let employee_id = seed_employee(&db, "Eve", "Santos", "eve@example.com", None, None).await;
    let job_id = seed_job(&db, "Analyst", "Reports", Some(160), Some(employee_id)).await;
    let app = setup_test_app(db.clone());

    let err = personnel_api::repository::employee::delete_by_id(&db, employee_id)
        .await
        .expect_err("delete of a referenced employee succeeded");
    assert!(matches!(
        err,
        personnel_api::StoreError::ConstraintViolation(_)
    ));

    // Detach the job with a full update (PUT writes absent fields as null),
    // after which the employee can go.
    let (status, _, body) = request(
        &app,
        "PUT",
        &format!("/api/jobs/{job_id}"),
        Some(json!({"id": job_id, "jobTitle": "Analyst"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employeeId"], serde_json::Value::Null);

    let (status, _, _) = request(&app, "DELETE", &format!("/api/employees/{employee_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
