//! Department data access. No parent to join; reads still go through the
//! aliased select and row mapper so all three repositories share one shape.

use super::rows;
use crate::criteria;
use crate::entities::department;
use crate::errors::StoreError;
use crate::pagination::PageRequest;
use sea_orm::sea_query::{Alias, ConditionalStatement, Expr, ExprTrait, Query, SelectStatement};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryResult,
};

const DEPARTMENT: &str = "department";

pub(crate) fn sortable_columns() -> Vec<(&'static str, (department::Entity, department::Column))> {
    vec![
        ("id", (department::Entity, department::Column::Id)),
        (
            "departmentName",
            (department::Entity, department::Column::DepartmentName),
        ),
    ]
}

fn select_department() -> SelectStatement {
    let mut stmt = Query::select();
    stmt.from(department::Entity);
    for (name, column) in rows::DEPARTMENT_COLUMNS {
        stmt.expr_as(
            Expr::col((department::Entity, column)),
            Alias::new(format!("{DEPARTMENT}_{name}")),
        );
    }
    stmt
}

fn map_row(row: &QueryResult) -> Result<department::Model, StoreError> {
    rows::department_from_row(row, DEPARTMENT)
}

pub async fn find_all<C: ConnectionTrait>(
    conn: &C,
    page: &PageRequest,
) -> Result<Vec<department::Model>, StoreError> {
    let mut stmt = select_department();
    let orders = criteria::resolve_ordering(&page.sort, &sortable_columns());
    criteria::apply_page(&mut stmt, orders, page);
    super::fetch_all(conn, &stmt, map_row).await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i64,
) -> Result<Option<department::Model>, StoreError> {
    let mut stmt = select_department();
    stmt.cond_where(Expr::col((department::Entity, department::Column::Id)).eq(id));
    super::fetch_one(conn, &stmt, map_row).await
}

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    model: department::ActiveModel,
) -> Result<i64, StoreError> {
    let result = department::Entity::insert(model)
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
    mut model: department::ActiveModel,
) -> Result<u64, StoreError> {
    model.id = ActiveValue::NotSet;
    let result = department::Entity::update_many()
        .set(model)
        .filter(department::Column::Id.eq(id))
        .exec(conn)
        .await
        .map_err(StoreError::from)?;
    Ok(result.rows_affected)
}

pub async fn save<C: ConnectionTrait>(
    conn: &C,
    model: department::ActiveModel,
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
    let result = department::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(StoreError::from)?;
    Ok(result.rows_affected)
}

pub async fn exists_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<bool, StoreError> {
    let matches = department::Entity::find()
        .filter(department::Column::Id.eq(id))
        .count(conn)
        .await
        .map_err(StoreError::from)?;
    Ok(matches > 0)
}

pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, StoreError> {
    department::Entity::find()
        .count(conn)
        .await
        .map_err(StoreError::from)
}
