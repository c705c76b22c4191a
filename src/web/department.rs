//! REST handlers for the Department resource.

use super::{AppState, check_id, location};
use crate::dto::{DepartmentDto, DepartmentInput};
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
        .route("/departments", get(get_all).post(create))
        .route(
            "/departments/{id}",
            get(get_one).put(update).patch(partial_update).delete(delete_one),
        )
}

/// Get a page of departments.
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = "departments",
    params(PageParams),
    responses((status = 200, body = [DepartmentDto]))
)]
pub async fn get_all(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<(HeaderMap, Json<Vec<DepartmentDto>>), ApiError> {
    let (items, total) = state.departments.find_all(params.into()).await?;
    Ok((total_count_header(total), Json(items)))
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    tag = "departments",
    params(("id" = i64, Path, description = "Department id")),
    responses((status = 200, body = DepartmentDto), (status = 404))
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DepartmentDto>, ApiError> {
    state
        .departments
        .find_one(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Department", Some(id)))
}

/// Create a new department. The payload must not carry an id.
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = "departments",
    request_body = DepartmentInput,
    responses((status = 201, body = DepartmentDto), (status = 400))
)]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<DepartmentInput>,
) -> Result<(StatusCode, HeaderMap, Json<DepartmentDto>), ApiError> {
    if payload.id.is_some() {
        return Err(ApiError::bad_request(
            "A new department cannot already have an id",
        ));
    }
    let created = state.departments.create(payload).await?;
    let headers = location("departments", created.id);
    Ok((StatusCode::CREATED, headers, Json(created)))
}

/// Replace an existing department. The body id must match the path id.
#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    tag = "departments",
    params(("id" = i64, Path, description = "Department id")),
    request_body = DepartmentInput,
    responses((status = 200, body = DepartmentDto), (status = 400), (status = 404))
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentInput>,
) -> Result<Json<DepartmentDto>, ApiError> {
    check_id(id, payload.id)?;
    let updated = state.departments.update(id, payload).await?;
    Ok(Json(updated))
}

/// Partially update an existing department.
#[utoipa::path(
    patch,
    path = "/api/departments/{id}",
    tag = "departments",
    params(("id" = i64, Path, description = "Department id")),
    request_body = DepartmentInput,
    responses((status = 200, body = DepartmentDto), (status = 400), (status = 404))
)]
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentInput>,
) -> Result<Json<DepartmentDto>, ApiError> {
    check_id(id, payload.id)?;
    let updated = state.departments.partial_update(id, payload).await?;
    Ok(Json(updated))
}

/// Idempotent delete: 204 whether or not the row existed.
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    tag = "departments",
    params(("id" = i64, Path, description = "Department id")),
    responses((status = 204))
)]
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.departments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
