use crate::dto::{JobDto, JobInput};
use crate::errors::ApiError;
use crate::pagination::PageRequest;
use crate::repository::job as job_repo;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

/// Service interface for managing jobs.
#[async_trait]
pub trait JobService: Send + Sync {
    async fn find_all(&self, page: PageRequest) -> Result<(Vec<JobDto>, u64), ApiError>;
    async fn find_one(&self, id: i64) -> Result<Option<JobDto>, ApiError>;
    async fn create(&self, input: JobInput) -> Result<JobDto, ApiError>;
    async fn update(&self, id: i64, input: JobInput) -> Result<JobDto, ApiError>;
    async fn partial_update(&self, id: i64, input: JobInput) -> Result<JobDto, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
    /// All jobs back-referencing one employee.
    async fn find_by_employee(&self, employee_id: i64) -> Result<Vec<JobDto>, ApiError>;
}

pub struct SqlJobService {
    db: DatabaseConnection,
}

impl SqlJobService {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_dtos(rows: Vec<job_repo::JobWithEmployee>) -> Vec<JobDto> {
    rows.into_iter().map(JobDto::from).collect()
}

#[async_trait]
impl JobService for SqlJobService {
    async fn find_all(&self, page: PageRequest) -> Result<(Vec<JobDto>, u64), ApiError> {
        tracing::debug!(page = page.page, size = page.size, "request to get jobs");
        let total = job_repo::count(&self.db).await?;
        let rows = job_repo::find_all(&self.db, &page).await?;
        Ok((to_dtos(rows), total))
    }

    async fn find_one(&self, id: i64) -> Result<Option<JobDto>, ApiError> {
        tracing::debug!(id, "request to get job");
        let row = job_repo::find_by_id(&self.db, id).await?;
        Ok(row.map(JobDto::from))
    }

    async fn create(&self, input: JobInput) -> Result<JobDto, ApiError> {
        tracing::debug!("request to save job");
        let txn = self.db.begin().await?;
        let id = job_repo::save(&txn, input.into_active_model()).await?;
        let stored = job_repo::find_by_id(&txn, id)
            .await?
            .ok_or_else(|| ApiError::not_found("Job", Some(id)))?;
        txn.commit().await?;
        Ok(stored.into())
    }

    async fn update(&self, id: i64, input: JobInput) -> Result<JobDto, ApiError> {
        tracing::debug!(id, "request to update job");
        let txn = self.db.begin().await?;
        if !job_repo::exists_by_id(&txn, id).await? {
            return Err(ApiError::not_found("Job", Some(id)));
        }
        let affected = job_repo::update(&txn, id, input.into_active_model()).await?;
        if affected == 0 {
            return Err(ApiError::not_found("Job", Some(id)));
        }
        let stored = job_repo::find_by_id(&txn, id)
            .await?
            .ok_or_else(|| ApiError::not_found("Job", Some(id)))?;
        txn.commit().await?;
        Ok(stored.into())
    }

    async fn partial_update(&self, id: i64, input: JobInput) -> Result<JobDto, ApiError> {
        tracing::debug!(id, "request to partially update job");
        let txn = self.db.begin().await?;
        let Some((existing, _)) = job_repo::find_by_id(&txn, id).await? else {
            return Err(ApiError::not_found("Job", Some(id)));
        };
        job_repo::update(&txn, id, input.apply_to(existing)).await?;
        let stored = job_repo::find_by_id(&txn, id)
            .await?
            .ok_or_else(|| ApiError::not_found("Job", Some(id)))?;
        txn.commit().await?;
        Ok(stored.into())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let removed = job_repo::delete_by_id(&self.db, id).await?;
        tracing::debug!(id, removed, "request to delete job");
        Ok(())
    }

    async fn find_by_employee(&self, employee_id: i64) -> Result<Vec<JobDto>, ApiError> {
        let rows = job_repo::find_by_employee(&self.db, employee_id).await?;
        Ok(to_dtos(rows))
    }
}
