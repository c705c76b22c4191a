use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use personnel_api::migrations::Migrator;
use personnel_api::{AppState, api_router};
use sea_orm::{ActiveValue::Set, Database, DatabaseConnection, DbErr, EntityTrait};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

#[allow(dead_code)]
pub fn setup_test_app(db: DatabaseConnection) -> Router {
    api_router(AppState::new(db))
}

#[allow(dead_code)]
pub async fn seed_department(db: &DatabaseConnection, name: &str) -> i64 {
    use personnel_api::entities::department;
    let model = department::ActiveModel {
        department_name: Set(Some(name.to_string())),
        ..Default::default()
    };
    department::Entity::insert(model)
        .exec(db)
        .await
        .expect("failed to seed department")
        .last_insert_id
}

#[allow(dead_code)]
pub async fn seed_employee(
    db: &DatabaseConnection,
    first: &str,
    last: &str,
    email: &str,
    salary: Option<i64>,
    department_id: Option<i64>,
) -> i64 {
    use personnel_api::entities::employee;
    let model = employee::ActiveModel {
        first_name: Set(Some(first.to_string())),
        last_name: Set(Some(last.to_string())),
        email: Set(Some(email.to_string())),
        salary: Set(salary),
        department_id: Set(department_id),
        ..Default::default()
    };
    employee::Entity::insert(model)
        .exec(db)
        .await
        .expect("failed to seed employee")
        .last_insert_id
}

#[allow(dead_code)]
pub async fn seed_job(
    db: &DatabaseConnection,
    title: &str,
    description: &str,
    hours: Option<i64>,
    employee_id: Option<i64>,
) -> i64 {
    use personnel_api::entities::job;
    let model = job::ActiveModel {
        job_title: Set(Some(title.to_string())),
        job_description: Set(Some(description.to_string())),
        job_hours: Set(hours),
        employee_id: Set(employee_id),
        ..Default::default()
    };
    job::Entity::insert(model)
        .exec(db)
        .await
        .expect("failed to seed job")
        .last_insert_id
}

/// Fire one request at the router and collect status, headers and JSON body
/// (Null for empty bodies).
#[allow(dead_code)]
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, HeaderMap, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&json).expect("failed to encode request body"))
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("failed to build request"))
        .await
        .expect("request failed");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is not JSON")
    };
    (status, headers, json)
}
