//! REST handlers for the Employee resource.

use super::{AppState, check_id, location};
use crate::dto::{EmployeeDto, EmployeeInput};
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
        .route("/employees", get(get_all).post(create))
        .route("/employees/report/{id}", get(by_department))
        .route("/employees/withoutdepartments", get(without_department))
        .route("/employees/search/{term}", get(search))
        .route("/employees/salarygreaterthan/{salary}", get(salary_greater_than))
        .route(
            "/employees/{id}",
            get(get_one).put(update).patch(partial_update).delete(delete_one),
        )
}

/// Get a page of employees.
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "employees",
    params(PageParams),
    responses((status = 200, body = [EmployeeDto]))
)]
pub async fn get_all(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<(HeaderMap, Json<Vec<EmployeeDto>>), ApiError> {
    let (items, total) = state.employees.find_all(params.into()).await?;
    Ok((total_count_header(total), Json(items)))
}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses((status = 200, body = EmployeeDto), (status = 404))
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeDto>, ApiError> {
    state
        .employees
        .find_one(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Employee", Some(id)))
}

/// Create a new employee. The payload must not carry an id.
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "employees",
    request_body = EmployeeInput,
    responses((status = 201, body = EmployeeDto), (status = 400))
)]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeInput>,
) -> Result<(StatusCode, HeaderMap, Json<EmployeeDto>), ApiError> {
    if payload.id.is_some() {
        return Err(ApiError::bad_request(
            "A new employee cannot already have an id",
        ));
    }
    let created = state.employees.create(payload).await?;
    let headers = location("employees", created.id);
    Ok((StatusCode::CREATED, headers, Json(created)))
}

/// Replace an existing employee. The body id must match the path id.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    request_body = EmployeeInput,
    responses((status = 200, body = EmployeeDto), (status = 400), (status = 404))
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeInput>,
) -> Result<Json<EmployeeDto>, ApiError> {
    check_id(id, payload.id)?;
    let updated = state.employees.update(id, payload).await?;
    Ok(Json(updated))
}

/// Partially update an existing employee: absent fields are left untouched.
#[utoipa::path(
    patch,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    request_body = EmployeeInput,
    responses((status = 200, body = EmployeeDto), (status = 400), (status = 404))
)]
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeInput>,
) -> Result<Json<EmployeeDto>, ApiError> {
    check_id(id, payload.id)?;
    let updated = state.employees.partial_update(id, payload).await?;
    Ok(Json(updated))
}

/// Idempotent delete: 204 whether or not the row existed.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses((status = 204))
)]
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// All employees of one department.
#[utoipa::path(
    get,
    path = "/api/employees/report/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Department id")),
    responses((status = 200, body = [EmployeeDto]))
)]
pub async fn by_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    Ok(Json(state.employees.find_by_department(id).await?))
}

/// All employees that are not assigned to any department.
#[utoipa::path(
    get,
    path = "/api/employees/withoutdepartments",
    tag = "employees",
    responses((status = 200, body = [EmployeeDto]))
)]
pub async fn without_department(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    Ok(Json(state.employees.find_without_department().await?))
}

/// Case-insensitive substring search over first name, last name and email.
#[utoipa::path(
    get,
    path = "/api/employees/search/{term}",
    tag = "employees",
    params(("term" = String, Path, description = "Substring to search for")),
    responses((status = 200, body = [EmployeeDto]))
)]
pub async fn search(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    Ok(Json(state.employees.search(&term).await?))
}

/// Employees with a salary strictly above the given amount.
#[utoipa::path(
    get,
    path = "/api/employees/salarygreaterthan/{salary}",
    tag = "employees",
    params(("salary" = i64, Path, description = "Exclusive salary floor")),
    responses((status = 200, body = [EmployeeDto]))
)]
pub async fn salary_greater_than(
    State(state): State<AppState>,
    Path(salary): Path<i64>,
) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    Ok(Json(state.employees.salary_greater_than(salary).await?))
}
