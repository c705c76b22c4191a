use crate::dto::{DepartmentDto, DepartmentInput};
use crate::errors::ApiError;
use crate::pagination::PageRequest;
use crate::repository::department as department_repo;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

/// Service interface for managing departments.
#[async_trait]
pub trait DepartmentService: Send + Sync {
    async fn find_all(&self, page: PageRequest) -> Result<(Vec<DepartmentDto>, u64), ApiError>;
    async fn find_one(&self, id: i64) -> Result<Option<DepartmentDto>, ApiError>;
    async fn create(&self, input: DepartmentInput) -> Result<DepartmentDto, ApiError>;
    async fn update(&self, id: i64, input: DepartmentInput) -> Result<DepartmentDto, ApiError>;
    async fn partial_update(
        &self,
        id: i64,
        input: DepartmentInput,
    ) -> Result<DepartmentDto, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

pub struct SqlDepartmentService {
    db: DatabaseConnection,
}

impl SqlDepartmentService {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentService for SqlDepartmentService {
    async fn find_all(&self, page: PageRequest) -> Result<(Vec<DepartmentDto>, u64), ApiError> {
        tracing::debug!(page = page.page, size = page.size, "request to get departments");
        let total = department_repo::count(&self.db).await?;
        let rows = department_repo::find_all(&self.db, &page).await?;
        Ok((rows.into_iter().map(DepartmentDto::from).collect(), total))
    }

    async fn find_one(&self, id: i64) -> Result<Option<DepartmentDto>, ApiError> {
        tracing::debug!(id, "request to get department");
        let row = department_repo::find_by_id(&self.db, id).await?;
        Ok(row.map(DepartmentDto::from))
    }

    async fn create(&self, input: DepartmentInput) -> Result<DepartmentDto, ApiError> {
        tracing::debug!("request to save department");
        let txn = self.db.begin().await?;
        let id = department_repo::save(&txn, input.into_active_model()).await?;
        let stored = department_repo::find_by_id(&txn, id)
            .await?
            .ok_or_else(|| ApiError::not_found("Department", Some(id)))?;
        txn.commit().await?;
        Ok(stored.into())
    }

    async fn update(&self, id: i64, input: DepartmentInput) -> Result<DepartmentDto, ApiError> {
        tracing::debug!(id, "request to update department");
        let txn = self.db.begin().await?;
        if !department_repo::exists_by_id(&txn, id).await? {
            return Err(ApiError::not_found("Department", Some(id)));
        }
        let affected = department_repo::update(&txn, id, input.into_active_model()).await?;
        if affected == 0 {
            return Err(ApiError::not_found("Department", Some(id)));
        }
        let stored = department_repo::find_by_id(&txn, id)
            .await?
            .ok_or_else(|| ApiError::not_found("Department", Some(id)))?;
        txn.commit().await?;
        Ok(stored.into())
    }

    async fn partial_update(
        &self,
        id: i64,
        input: DepartmentInput,
    ) -> Result<DepartmentDto, ApiError> {
        tracing::debug!(id, "request to partially update department");
        let txn = self.db.begin().await?;
        let Some(existing) = department_repo::find_by_id(&txn, id).await? else {
            return Err(ApiError::not_found("Department", Some(id)));
        };
        department_repo::update(&txn, id, input.apply_to(existing)).await?;
        let stored = department_repo::find_by_id(&txn, id)
            .await?
            .ok_or_else(|| ApiError::not_found("Department", Some(id)))?;
        txn.commit().await?;
        Ok(stored.into())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let removed = department_repo::delete_by_id(&self.db, id).await?;
        tracing::debug!(id, removed, "request to delete department");
        Ok(())
    }
}
