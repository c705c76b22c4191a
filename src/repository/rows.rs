//! Row-to-entity mapping for joined selects.
//!
//! Every select aliases its columns `{prefix}_{column}` (e.g.
//! `job_job_title`), one prefix per joined table, and the mappers here read
//! them back through a single null-tolerant conversion primitive. The column
//! lists below drive both the aliasing and the mapping, so a drifting name
//! shows up in one place. Mappers are pure functions over a single row and
//! may run concurrently.

use crate::entities::{department, employee, job};
use crate::errors::StoreError;
use sea_orm::{QueryResult, TryGetable};

pub(crate) const EMPLOYEE_COLUMNS: [(&str, employee::Column); 7] = [
    ("id", employee::Column::Id),
    ("first_name", employee::Column::FirstName),
    ("last_name", employee::Column::LastName),
    ("email", employee::Column::Email),
    ("phone_number", employee::Column::PhoneNumber),
    ("salary", employee::Column::Salary),
    ("department_id", employee::Column::DepartmentId),
];

pub(crate) const JOB_COLUMNS: [(&str, job::Column); 5] = [
    ("id", job::Column::Id),
    ("job_title", job::Column::JobTitle),
    ("job_description", job::Column::JobDescription),
    ("job_hours", job::Column::JobHours),
    ("employee_id", job::Column::EmployeeId),
];

pub(crate) const DEPARTMENT_COLUMNS: [(&str, department::Column); 2] = [
    ("id", department::Column::Id),
    ("department_name", department::Column::DepartmentName),
];

/// Read one column of the expected type, tolerating NULL.
///
/// A NULL cell maps to `None`; a stored value that cannot be coerced to `T`
/// surfaces as [`StoreError::TypeMismatch`]. Driver-native numeric widths
/// normalize to the declared field type (`i64` for identifiers).
pub(crate) fn read<T: TryGetable>(
    row: &QueryResult,
    prefix: &str,
    column: &str,
) -> Result<Option<T>, StoreError> {
    row.try_get::<Option<T>>(&format!("{prefix}_"), column)
        .map_err(StoreError::from)
}

/// Read a column that the schema guarantees non-null (primary keys).
fn require<T: TryGetable>(row: &QueryResult, prefix: &str, column: &str) -> Result<T, StoreError> {
    row.try_get::<T>(&format!("{prefix}_"), column)
        .map_err(StoreError::from)
}

pub(crate) fn employee_from_row(
    row: &QueryResult,
    prefix: &str,
) -> Result<employee::Model, StoreError> {
    Ok(employee::Model {
        id: require(row, prefix, "id")?,
        first_name: read(row, prefix, "first_name")?,
        last_name: read(row, prefix, "last_name")?,
        email: read(row, prefix, "email")?,
        phone_number: read(row, prefix, "phone_number")?,
        salary: read(row, prefix, "salary")?,
        department_id: read(row, prefix, "department_id")?,
    })
}

pub(crate) fn job_from_row(row: &QueryResult, prefix: &str) -> Result<job::Model, StoreError> {
    Ok(job::Model {
        id: require(row, prefix, "id")?,
        job_title: read(row, prefix, "job_title")?,
        job_description: read(row, prefix, "job_description")?,
        job_hours: read(row, prefix, "job_hours")?,
        employee_id: read(row, prefix, "employee_id")?,
    })
}

pub(crate) fn department_from_row(
    row: &QueryResult,
    prefix: &str,
) -> Result<department::Model, StoreError> {
    Ok(department::Model {
        id: require(row, prefix, "id")?,
        department_name: read(row, prefix, "department_name")?,
    })
}

/// Map a left-joined parent: a NULL id means the join found nothing.
pub(crate) fn joined_department_from_row(
    row: &QueryResult,
    prefix: &str,
) -> Result<Option<department::Model>, StoreError> {
    match read::<i64>(row, prefix, "id")? {
        Some(_) => department_from_row(row, prefix).map(Some),
        None => Ok(None),
    }
}

pub(crate) fn joined_employee_from_row(
    row: &QueryResult,
    prefix: &str,
) -> Result<Option<employee::Model>, StoreError> {
    match read::<i64>(row, prefix, "id")? {
        Some(_) => employee_from_row(row, prefix).map(Some),
        None => Ok(None),
    }
}
