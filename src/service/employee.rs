use crate::dto::{EmployeeDto, EmployeeInput};
use crate::errors::ApiError;
use crate::pagination::PageRequest;
use crate::repository::employee as employee_repo;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

/// Service interface for managing employees.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// One page of employees plus the total row count for pagination
    /// metadata.
    async fn find_all(&self, page: PageRequest) -> Result<(Vec<EmployeeDto>, u64), ApiError>;

    /// Absence is `None`, never an error.
    async fn find_one(&self, id: i64) -> Result<Option<EmployeeDto>, ApiError>;

    async fn create(&self, input: EmployeeInput) -> Result<EmployeeDto, ApiError>;

    /// Full replacement of an existing row.
    async fn update(&self, id: i64, input: EmployeeInput) -> Result<EmployeeDto, ApiError>;

    /// Merge only the provided fields onto an existing row.
    async fn partial_update(&self, id: i64, input: EmployeeInput)
    -> Result<EmployeeDto, ApiError>;

    /// Idempotent; deleting an absent id succeeds.
    async fn delete(&self, id: i64) -> Result<(), ApiError>;

    async fn find_by_department(&self, department_id: i64) -> Result<Vec<EmployeeDto>, ApiError>;
    async fn find_without_department(&self) -> Result<Vec<EmployeeDto>, ApiError>;
    async fn search(&self, term: &str) -> Result<Vec<EmployeeDto>, ApiError>;
    async fn salary_greater_than(&self, salary: i64) -> Result<Vec<EmployeeDto>, ApiError>;
}

pub struct SqlEmployeeService {
    db: DatabaseConnection,
}

impl SqlEmployeeService {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_dtos(rows: Vec<employee_repo::EmployeeWithDepartment>) -> Vec<EmployeeDto> {
    rows.into_iter().map(EmployeeDto::from).collect()
}

#[async_trait]
impl EmployeeService for SqlEmployeeService {
    async fn find_all(&self, page: PageRequest) -> Result<(Vec<EmployeeDto>, u64), ApiError> {
        tracing::debug!(page = page.page, size = page.size, "request to get employees");
        let total = employee_repo::count(&self.db).await?;
        let rows = employee_repo::find_all(&self.db, &page).await?;
        Ok((to_dtos(rows), total))
    }

    async fn find_one(&self, id: i64) -> Result<Option<EmployeeDto>, ApiError> {
        tracing::debug!(id, "request to get employee");
        let row = employee_repo::find_by_id(&self.db, id).await?;
        Ok(row.map(EmployeeDto::from))
    }

    async fn create(&self, input: EmployeeInput) -> Result<EmployeeDto, ApiError> {
        tracing::debug!("request to save employee");
        let txn = self.db.begin().await?;
        let id = employee_repo::save(&txn, input.into_active_model()).await?;
        let stored = employee_repo::find_by_id(&txn, id)
            .await?
            .ok_or_else(|| ApiError::not_found("Employee", Some(id)))?;
        txn.commit().await?;
        Ok(stored.into())
    }

    async fn update(&self, id: i64, input: EmployeeInput) -> Result<EmployeeDto, ApiError> {
        tracing::debug!(id, "request to update employee");
        let txn = self.db.begin().await?;
        if !employee_repo::exists_by_id(&txn, id).await? {
            return Err(ApiError::not_found("Employee", Some(id)));
        }
        let affected = employee_repo::update(&txn, id, input.into_active_model()).await?;
        if affected == 0 {
            return Err(ApiError::not_found("Employee", Some(id)));
        }
        let stored = employee_repo::find_by_id(&txn, id)
            .await?
            .ok_or_else(|| ApiError::not_found("Employee", Some(id)))?;
        txn.commit().await?;
        Ok(stored.into())
    }

    async fn partial_update(
        &self,
        id: i64,
        input: EmployeeInput,
    ) -> Result<EmployeeDto, ApiError> {
        tracing::debug!(id, "request to partially update employee");
        let txn = self.db.begin().await?;
        let Some((existing, _)) = employee_repo::find_by_id(&txn, id).await? else {
            return Err(ApiError::not_found("Employee", Some(id)));
        };
        employee_repo::update(&txn, id, input.apply_to(existing)).await?;
        let stored = employee_repo::find_by_id(&txn, id)
            .await?
            .ok_or_else(|| ApiError::not_found("Employee", Some(id)))?;
        txn.commit().await?;
        Ok(stored.into())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let removed = employee_repo::delete_by_id(&self.db, id).await?;
        tracing::debug!(id, removed, "request to delete employee");
        Ok(())
    }

    async fn find_by_department(&self, department_id: i64) -> Result<Vec<EmployeeDto>, ApiError> {
        tracing::debug!(department_id, "request to get employees of a department");
        let rows = employee_repo::find_by_department(&self.db, department_id).await?;
        Ok(to_dtos(rows))
    }

    async fn find_without_department(&self) -> Result<Vec<EmployeeDto>, ApiError> {
        let rows = employee_repo::find_where_department_is_null(&self.db).await?;
        Ok(to_dtos(rows))
    }

    async fn search(&self, term: &str) -> Result<Vec<EmployeeDto>, ApiError> {
        tracing::debug!(term, "request to search employees");
        let rows = employee_repo::search(&self.db, term).await?;
        Ok(to_dtos(rows))
    }

    async fn salary_greater_than(&self, salary: i64) -> Result<Vec<EmployeeDto>, ApiError> {
        let rows = employee_repo::find_by_salary_greater_than(&self.db, salary).await?;
        Ok(to_dtos(rows))
    }
}
