use crate::dto::employee::{DepartmentSummary, EmployeeRef};
use crate::dto::{DepartmentDto, DepartmentInput, EmployeeDto, EmployeeInput, JobDto, JobInput};
use utoipa::OpenApi;

/// OpenAPI document for the whole REST surface, served at
/// `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "personnel-api",
        description = "Reactive CRUD backend for employees, jobs and departments"
    ),
    paths(
        crate::web::employee::get_all,
        crate::web::employee::get_one,
        crate::web::employee::create,
        crate::web::employee::update,
        crate::web::employee::partial_update,
        crate::web::employee::delete_one,
        crate::web::employee::by_department,
        crate::web::employee::without_department,
        crate::web::employee::search,
        crate::web::employee::salary_greater_than,
        crate::web::job::get_all,
        crate::web::job::get_one,
        crate::web::job::create,
        crate::web::job::update,
        crate::web::job::partial_update,
        crate::web::job::delete_one,
        crate::web::job::by_employee,
        crate::web::department::get_all,
        crate::web::department::get_one,
        crate::web::department::create,
        crate::web::department::update,
        crate::web::department::partial_update,
        crate::web::department::delete_one,
    ),
    components(schemas(
        EmployeeDto,
        EmployeeInput,
        EmployeeRef,
        JobDto,
        JobInput,
        DepartmentDto,
        DepartmentInput,
        DepartmentSummary,
    )),
    tags(
        (name = "employees", description = "Employee management"),
        (name = "jobs", description = "Job management"),
        (name = "departments", description = "Department management"),
    )
)]
pub struct ApiDoc;
