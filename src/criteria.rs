//! Criteria building for paged queries.
//!
//! Translates a [`PageRequest`](crate::pagination::PageRequest) and optional
//! predicates into `WHERE` / `ORDER BY` / `LIMIT` / `OFFSET` clauses on a
//! `sea_query` select. Sort fields are resolved against a per-entity
//! whitelist; unknown fields are dropped rather than interpolated. Columns are
//! always table-qualified because list queries join the parent table.

use crate::pagination::{Direction, PageRequest, SortDirective};
use sea_orm::Order;
use sea_orm::sea_query::{
    Condition, Expr, ExprTrait, Func, IntoColumnRef, OrderedStatement, SelectStatement,
};

/// Case-insensitive substring match over any of the given columns.
///
/// Both the column value and the term are lower-cased before comparison, and
/// the term matches if it appears in at least one column (logical OR).
pub fn contains_ignoring_case<C, I>(term: &str, columns: I) -> Condition
where
    C: IntoColumnRef,
    I: IntoIterator<Item = C>,
{
    let pattern = format!("%{}%", term.to_lowercase());
    let mut any = Condition::any();
    for column in columns {
        any = any.add(Func::lower(Expr::col(column)).like(pattern.clone()));
    }
    any
}

/// Resolve requested sort directives against a whitelist of
/// `(wire field name, column)` pairs. Unknown fields are ignored.
pub fn resolve_ordering<C>(sort: &[SortDirective], sortable: &[(&str, C)]) -> Vec<(C, Order)>
where
    C: IntoColumnRef + Copy,
{
    sort.iter()
        .filter_map(|directive| {
            sortable
                .iter()
                .find(|(field, _)| *field == directive.field)
                .map(|(_, column)| (*column, order_for(directive.direction)))
        })
        .collect()
}

fn order_for(direction: Direction) -> Order {
    match direction {
        Direction::Asc => Order::Asc,
        Direction::Desc => Order::Desc,
    }
}

/// Apply ordering and the page window to a select. With no resolved
/// directives the statement carries no ORDER BY and the store's natural
/// order applies.
pub fn apply_page<C>(stmt: &mut SelectStatement, orders: Vec<(C, Order)>, page: &PageRequest)
where
    C: IntoColumnRef,
{
    for (column, order) in orders {
        stmt.order_by(column, order);
    }
    stmt.limit(page.limit()).offset(page.offset());
}
