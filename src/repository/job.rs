//! Job data access. Same template as the employee repository, with the
//! owning employee left-joined onto every read.

use super::rows;
use crate::criteria;
use crate::entities::{employee, job};
use crate::errors::StoreError;
use crate::pagination::PageRequest;
use sea_orm::sea_query::{Alias, ConditionalStatement, Expr, ExprTrait, Query, SelectStatement};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryResult,
};

const JOB: &str = "job";
const EMPLOYEE: &str = "employee";

/// One job row together with its left-joined employee, when linked.
pub type JobWithEmployee = (job::Model, Option<employee::Model>);

pub(crate) fn sortable_columns() -> Vec<(&'static str, (job::Entity, job::Column))> {
    vec![
        ("id", (job::Entity, job::Column::Id)),
        ("jobTitle", (job::Entity, job::Column::JobTitle)),
        ("jobDescription", (job::Entity, job::Column::JobDescription)),
        ("jobHours", (job::Entity, job::Column::JobHours)),
        ("employeeId", (job::Entity, job::Column::EmployeeId)),
    ]
}

fn select_with_employee() -> SelectStatement {
    let mut stmt = Query::select();
    stmt.from(job::Entity);
    for (name, column) in rows::JOB_COLUMNS {
        stmt.expr_as(
            Expr::col((job::Entity, column)),
            Alias::new(format!("{JOB}_{name}")),
        );
    }
    for (name, column) in rows::EMPLOYEE_COLUMNS {
        stmt.expr_as(
            Expr::col((employee::Entity, column)),
            Alias::new(format!("{EMPLOYEE}_{name}")),
        );
    }
    stmt.left_join(
        employee::Entity,
        Expr::col((job::Entity, job::Column::EmployeeId))
            .equals((employee::Entity, employee::Column::Id)),
    );
    stmt
}

fn map_row(row: &QueryResult) -> Result<JobWithEmployee, StoreError> {
    let entity = rows::job_from_row(row, JOB)?;
    let linked = rows::joined_employee_from_row(row, EMPLOYEE)?;
    Ok((entity, linked))
}

pub async fn find_all<C: ConnectionTrait>(
    conn: &C,
    page: &PageRequest,
) -> Result<Vec<JobWithEmployee>, StoreError> {
    let mut stmt = select_with_employee();
    let orders = criteria::resolve_ordering(&page.sort, &sortable_columns());
    criteria::apply_page(&mut stmt, orders, page);
    super::fetch_all(conn, &stmt, map_row).await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i64,
) -> Result<Option<JobWithEmployee>, StoreError> {
    let mut stmt = select_with_employee();
    stmt.cond_where(Expr::col((job::Entity, job::Column::Id)).eq(id));
    super::fetch_one(conn, &stmt, map_row).await
}

/// All jobs back-referencing the given employee.
pub async fn find_by_employee<C: ConnectionTrait>(
    conn: &C,
    employee_id: i64,
) -> Result<Vec<JobWithEmployee>, StoreError> {
    let mut stmt = select_with_employee();
    stmt.cond_where(Expr::col((job::Entity, job::Column::EmployeeId)).eq(employee_id));
    super::fetch_all(conn, &stmt, map_row).await
}

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    model: job::ActiveModel,
) -> Result<i64, StoreError> {
    let result = job::Entity::insert(model)
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
    mut model: job::ActiveModel,
) -> Result<u64, StoreError> {
    model.id = ActiveValue::NotSet;
    let result = job::Entity::update_many()
        .set(model)
        .filter(job::Column::Id.eq(id))
        .exec(conn)
        .await
        .map_err(StoreError::from)?;
    Ok(result.rows_affected)
}

pub async fn save<C: ConnectionTrait>(
    conn: &C,
    model: job::ActiveModel,
) -> Result<i64, StoreError> {
    match model.id.clone() {
        ActiveValue::Set(id) | ActiveValue::Unchanged(id) => {
            update(conn, id, model).await?;
            Ok(id)
        }
        ActiveValue::NotSet => insert(conn, model).await,
    }
}

pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<u64, StoreError> {
    let result = job::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(StoreError::from)?;
    Ok(result.rows_affected)
}

pub async fn exists_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<bool, StoreError> {
    let matches = job::Entity::find()
        .filter(job::Column::Id.eq(id))
        .count(conn)
        .await
        .map_err(StoreError::from)?;
    Ok(matches > 0)
}

pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, StoreError> {
    job::Entity::find()
        .count(conn)
        .await
        .map_err(StoreError::from)
}
