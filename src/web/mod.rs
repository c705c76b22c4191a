//! REST surface: one router per entity under `/api`, mirroring the
//! generated-resource layout of the backend this replaces.

pub mod department;
pub mod employee;
pub mod job;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;
use crate::service::{
    DepartmentService, EmployeeService, JobService, SqlDepartmentService, SqlEmployeeService,
    SqlJobService,
};
use axum::{Json, Router, routing::get};
use hyper::HeaderMap;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeService>,
    pub jobs: Arc<dyn JobService>,
    pub departments: Arc<dyn DepartmentService>,
}

impl AppState {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            employees: Arc::new(SqlEmployeeService::new(db.clone())),
            jobs: Arc::new(SqlJobService::new(db.clone())),
            departments: Arc::new(SqlDepartmentService::new(db)),
        }
    }
}

/// Update and patch bodies must carry an id, and it must match the path.
pub(crate) fn check_id(path_id: i64, body_id: Option<i64>) -> Result<(), ApiError> {
    match body_id {
        None => Err(ApiError::bad_request("Missing id in request body")),
        Some(id) if id != path_id => Err(ApiError::bad_request("Id in body does not match path")),
        Some(_) => Ok(()),
    }
}

/// `Location` header for a freshly created resource.
pub(crate) fn location(resource: &str, id: Option<i64>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(id) = id
        && let Ok(value) = format!("/api/{resource}/{id}").parse()
    {
        headers.insert("Location", value);
    }
    headers
}

/// The full application router: entity resources under `/api` plus the
/// OpenAPI document.
#[must_use]
pub fn api_router(state: AppState) -> Router {
    let api = employee::router()
        .merge(job::router())
        .merge(department::router());
    Router::new()
        .nest("/api", api)
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .with_state(state)
}
