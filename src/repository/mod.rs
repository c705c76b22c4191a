//! Data access for the three entities.
//!
//! Writes go through the Sea-ORM `ActiveModel` API. List and get reads run a
//! hand-built joined select through [`criteria`](crate::criteria) and the row
//! mappers in [`rows`], so every returned entity carries its parent row when
//! one is linked. All operations take any [`ConnectionTrait`] implementor, so
//! services can run them on a plain connection or inside an explicit
//! transaction.

pub mod department;
pub mod employee;
pub mod job;
pub(crate) mod rows;

use crate::errors::StoreError;
use sea_orm::sea_query::SelectStatement;
use sea_orm::{ConnectionTrait, QueryResult};

/// Execute a select and map every row.
pub(crate) async fn fetch_all<C, T, F>(
    conn: &C,
    stmt: &SelectStatement,
    map_row: F,
) -> Result<Vec<T>, StoreError>
where
    C: ConnectionTrait,
    F: Fn(&QueryResult) -> Result<T, StoreError>,
{
    let statement = conn.get_database_backend().build(stmt);
    let rows = conn.query_all(statement).await.map_err(StoreError::from)?;
    rows.iter().map(map_row).collect()
}

/// Execute a select expected to yield at most one row. Absence is data, not
/// an error.
pub(crate) async fn fetch_one<C, T, F>(
    conn: &C,
    stmt: &SelectStatement,
    map_row: F,
) -> Result<Option<T>, StoreError>
where
    C: ConnectionTrait,
    F: Fn(&QueryResult) -> Result<T, StoreError>,
{
    let statement = conn.get_database_backend().build(stmt);
    let row = conn.query_one(statement).await.map_err(StoreError::from)?;
    row.as_ref().map(map_row).transpose()
}
