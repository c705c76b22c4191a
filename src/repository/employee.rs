//! Employee data access: template CRUD plus the ad-hoc finders
//! (by department, department-is-null, substring search, salary floor).

use super::rows;
use crate::criteria;
use crate::entities::{department, employee};
use crate::errors::StoreError;
use crate::pagination::PageRequest;
use sea_orm::sea_query::{
    Alias, Condition, ConditionalStatement, Expr, ExprTrait, Query, SelectStatement,
};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryResult,
};

const EMPLOYEE: &str = "employee";
const DEPARTMENT: &str = "department";

/// One employee row together with its left-joined department, when linked.
pub type EmployeeWithDepartment = (employee::Model, Option<department::Model>);

pub(crate) fn sortable_columns() -> Vec<(&'static str, (employee::Entity, employee::Column))> {
    vec![
        ("id", (employee::Entity, employee::Column::Id)),
        ("firstName", (employee::Entity, employee::Column::FirstName)),
        ("lastName", (employee::Entity, employee::Column::LastName)),
        ("email", (employee::Entity, employee::Column::Email)),
        ("phoneNumber", (employee::Entity, employee::Column::PhoneNumber)),
        ("salary", (employee::Entity, employee::Column::Salary)),
        ("departmentId", (employee::Entity, employee::Column::DepartmentId)),
    ]
}

/// Base select joining the department table, every column aliased
/// `{prefix}_{column}` for the row mappers.
fn select_with_department() -> SelectStatement {
    let mut stmt = Query::select();
    stmt.from(employee::Entity);
    for (name, column) in rows::EMPLOYEE_COLUMNS {
        stmt.expr_as(
            Expr::col((employee::Entity, column)),
            Alias::new(format!("{EMPLOYEE}_{name}")),
        );
    }
    for (name, column) in rows::DEPARTMENT_COLUMNS {
        stmt.expr_as(
            Expr::col((department::Entity, column)),
            Alias::new(format!("{DEPARTMENT}_{name}")),
        );
    }
    stmt.left_join(
        department::Entity,
        Expr::col((employee::Entity, employee::Column::DepartmentId))
            .equals((department::Entity, department::Column::Id)),
    );
    stmt
}

fn map_row(row: &QueryResult) -> Result<EmployeeWithDepartment, StoreError> {
    let entity = rows::employee_from_row(row, EMPLOYEE)?;
    let linked = rows::joined_department_from_row(row, DEPARTMENT)?;
    Ok((entity, linked))
}

pub async fn find_all<C: ConnectionTrait>(
    conn: &C,
    page: &PageRequest,
) -> Result<Vec<EmployeeWithDepartment>, StoreError> {
    let mut stmt = select_with_department();
    let orders = criteria::resolve_ordering(&page.sort, &sortable_columns());
    criteria::apply_page(&mut stmt, orders, page);
    super::fetch_all(conn, &stmt, map_row).await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i64,
) -> Result<Option<EmployeeWithDepartment>, StoreError> {
    let mut stmt = select_with_department();
    stmt.cond_where(Expr::col((employee::Entity, employee::Column::Id)).eq(id));
    super::fetch_one(conn, &stmt, map_row).await
}

pub async fn find_by_department<C: ConnectionTrait>(
    conn: &C,
    department_id: i64,
) -> Result<Vec<EmployeeWithDepartment>, StoreError> {
    let mut stmt = select_with_department();
    stmt.cond_where(
        Expr::col((employee::Entity, employee::Column::DepartmentId)).eq(department_id),
    );
    super::fetch_all(conn, &stmt, map_row).await
}

pub async fn find_where_department_is_null<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<EmployeeWithDepartment>, StoreError> {
    let mut stmt = select_with_department();
    stmt.cond_where(Expr::col((employee::Entity, employee::Column::DepartmentId)).is_null());
    super::fetch_all(conn, &stmt, map_row).await
}

/// Case-insensitive substring search across first name, last name and email.
pub async fn search<C: ConnectionTrait>(
    conn: &C,
    term: &str,
) -> Result<Vec<EmployeeWithDepartment>, StoreError> {
    let mut stmt = select_with_department();
    stmt.cond_where(Condition::all().add(criteria::contains_ignoring_case(
        term,
        [
            (employee::Entity, employee::Column::FirstName),
            (employee::Entity, employee::Column::LastName),
            (employee::Entity, employee::Column::Email),
        ],
    )));
    super::fetch_all(conn, &stmt, map_row).await
}

/// Employees whose salary is strictly above the given floor.
pub async fn find_by_salary_greater_than<C: ConnectionTrait>(
    conn: &C,
    salary: i64,
) -> Result<Vec<EmployeeWithDepartment>, StoreError> {
    let mut stmt = select_with_department();
    stmt.cond_where(Expr::col((employee::Entity, employee::Column::Salary)).gt(salary));
    super::fetch_all(conn, &stmt, map_row).await
}

/// Insert a new row; a pre-assigned id colliding with an existing row
/// surfaces as [`StoreError::DuplicateKey`]. Returns the stored id.
pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    model: employee::ActiveModel,
) -> Result<i64, StoreError> {
    let result = employee::Entity::insert(model)
        .exec(conn)
        .await
        .map_err(StoreError::from)?;
    Ok(result.last_insert_id)
}

/// Replace every column of the row with the given id. Returns the affected
/// row count; 0 means the id does not exist and nothing was written.
pub async fn update<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    mut model: employee::ActiveModel,
) -> Result<u64, StoreError> {
    model.id = ActiveValue::NotSet;
    let result = employee::Entity::update_many()
        .set(model)
        .filter(employee::Column::Id.eq(id))
        .exec(conn)
        .await
        .map_err(StoreError::from)?;
    Ok(result.rows_affected)
}

/// Dispatch on the presence of an id: insert without one, update with one.
pub async fn save<C: ConnectionTrait>(
    conn: &C,
    model: employee::ActiveModel,
) -> Result<i64, StoreError> {
    match model.id.clone() {
        ActiveValue::Set(id) | ActiveValue::Unchanged(id) => {
            update(conn, id, model).await?;
            Ok(id)
        }
        ActiveValue::NotSet => insert(conn, model).await,
    }
}

/// Idempotent: deleting an absent id affects zero rows and is not an error.
pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<u64, StoreError> {
    let result = employee::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(StoreError::from)?;
    Ok(result.rows_affected)
}

pub async fn exists_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<bool, StoreError> {
    let matches = employee::Entity::find()
        .filter(employee::Column::Id.eq(id))
        .count(conn)
        .await
        .map_err(StoreError::from)?;
    Ok(matches > 0)
}

pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, StoreError> {
    employee::Entity::find()
        .count(conn)
        .await
        .map_err(StoreError::from)
}
