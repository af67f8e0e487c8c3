//! Employee Service
//!
//! Orchestrates the repository calls and owns the soft-delete policy:
//! deleting an employee flips `estatus` to 0, the row stays in storage.

use shared::error::AppError;
use shared::models::{Employee, STATUS_ACTIVE, STATUS_DELETED};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::repository::{RepoError, employee as repo};

/// Service-level failures
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No record for the requested id
    #[error("Empleado no encontrado con ID: {id}")]
    NotFound { id: i64 },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            // Absence inside the service is an unclassified runtime failure (400)
            ServiceError::NotFound { .. } => AppError::runtime(err.to_string()),
            ServiceError::Repository(RepoError::NotFound(msg)) => AppError::runtime(msg),
            ServiceError::Repository(RepoError::Database(msg)) => AppError::database(msg),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EmployeeService {
    pool: SqlitePool,
}

impl EmployeeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Employees with `estatus = 1`, storage order
    pub async fn list_active(&self) -> ServiceResult<Vec<Employee>> {
        Ok(repo::find_by_status(&self.pool, STATUS_ACTIVE).await?)
    }

    /// Lookup by id; absence is a failure
    ///
    /// Soft-deleted employees are still returned.
    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Employee> {
        repo::find_by_id(&self.pool, id)
            .await?
            .ok_or(ServiceError::NotFound { id })
    }

    /// Insert or update, no field validation
    pub async fn save(&self, employee: Employee) -> ServiceResult<Employee> {
        Ok(repo::save(&self.pool, employee).await?)
    }

    /// Mark the employee as deleted (`estatus = 0`)
    pub async fn soft_delete(&self, id: i64) -> ServiceResult<()> {
        let mut employee = self.get_by_id(id).await?;
        employee.status = STATUS_DELETED;
        repo::save(&self.pool, employee).await?;
        tracing::info!(employee_id = id, "Employee soft-deleted");
        Ok(())
    }
}
