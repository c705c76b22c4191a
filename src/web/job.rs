//! REST handlers for the Job resource.

use super::{AppState, check_id, location};
use crate::dto::{JobDto, JobInput};
use crate::errors::ApiError;
use crate::pagination::{PageParams, total_count_header};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use hyper::HeaderMap;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(get_all).post(create))
        .route("/jobs/employee/{id}", get(by_employee))
        .route(
            "/jobs/{id}",
            get(get_one).put(update).patch(partial_update).delete(delete_one),
        )
}

/// Get a page of jobs.
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "jobs",
    params(PageParams),
    responses((status = 200, body = [JobDto]))
)]
pub async fn get_all(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<(HeaderMap, Json<Vec<JobDto>>), ApiError> {
    let (items, total) = state.jobs.find_all(params.into()).await?;
    Ok((total_count_header(total), Json(items)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = "jobs",
    params(("id" = i64, Path, description = "Job id")),
    responses((status = 200, body = JobDto), (status = 404))
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JobDto>, ApiError> {
    state
        .jobs
        .find_one(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Job", Some(id)))
}

/// Create a new job. The payload must not carry an id.
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = "jobs",
    request_body = JobInput,
    responses((status = 201, body = JobDto), (status = 400))
)]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<JobInput>,
) -> Result<(StatusCode, HeaderMap, Json<JobDto>), ApiError> {
    if payload.id.is_some() {
        return Err(ApiError::bad_request("A new job cannot already have an id"));
    }
    let created = state.jobs.create(payload).await?;
    let headers = location("jobs", created.id);
    Ok((StatusCode::CREATED, headers, Json(created)))
}

/// Replace an existing job. The body id must match the path id.
#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    tag = "jobs",
    params(("id" = i64, Path, description = "Job id")),
    request_body = JobInput,
    responses((status = 200, body = JobDto), (status = 400), (status = 404))
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<JobInput>,
) -> Result<Json<JobDto>, ApiError> {
    check_id(id, payload.id)?;
    let updated = state.jobs.update(id, payload).await?;
    Ok(Json(updated))
}

/// Partially update an existing job: absent fields are left untouched.
#[utoipa::path(
    patch,
    path = "/api/jobs/{id}",
    tag = "jobs",
    params(("id" = i64, Path, description = "Job id")),
    request_body = JobInput,
    responses((status = 200, body = JobDto), (status = 400), (status = 404))
)]
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<JobInput>,
) -> Result<Json<JobDto>, ApiError> {
    check_id(id, payload.id)?;
    let updated = state.jobs.partial_update(id, payload).await?;
    Ok(Json(updated))
}

/// Idempotent delete: 204 whether or not the row existed.
#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    tag = "jobs",
    params(("id" = i64, Path, description = "Job id")),
    responses((status = 204))
)]
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.jobs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// All jobs attached to one employee.
#[utoipa::path(
    get,
    path = "/api/jobs/employee/{id}",
    tag = "jobs",
    params(("id" = i64, Path, description = "Employee id")),
    responses((status = 200, body = [JobDto]))
)]
pub async fn by_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<JobDto>>, ApiError> {
    Ok(Json(state.jobs.find_by_employee(id).await?))
}
