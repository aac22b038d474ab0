//! Repository port for inspection task persistence.

use crate::inspection::domain::{
    InspectionTask, InspectionTaskChanges, InspectionTaskFilter, InspectionTaskId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for inspection task repository operations.
pub type InspectionTaskRepositoryResult<T> = Result<T, InspectionTaskRepositoryError>;

/// Inspection task persistence contract.
#[async_trait]
pub trait InspectionTaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionTaskRepositoryError::DuplicateTask`] when the task
    /// identifier already exists.
    async fn store(&self, task: &InspectionTask) -> InspectionTaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(
        &self,
        id: InspectionTaskId,
    ) -> InspectionTaskRepositoryResult<Option<InspectionTask>>;

    /// Returns the tasks selected by `filter`, in the filter's order.
    async fn list(
        &self,
        filter: InspectionTaskFilter,
    ) -> InspectionTaskRepositoryResult<Vec<InspectionTask>>;

    /// Merges `changes` into the stored task and returns the result.
    ///
    /// Only the fields present in `changes` are written, so concurrent
    /// updates to disjoint fields do not overwrite each other. `updated_at`
    /// is written only when `changes` is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionTaskRepositoryError::NotFound`] when the task does
    /// not exist.
    async fn apply_changes(
        &self,
        id: InspectionTaskId,
        changes: &InspectionTaskChanges,
        updated_at: DateTime<Utc>,
    ) -> InspectionTaskRepositoryResult<InspectionTask>;

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionTaskRepositoryError::NotFound`] when the task does
    /// not exist.
    async fn delete(&self, id: InspectionTaskId) -> InspectionTaskRepositoryResult<()>;
}

/// Errors returned by inspection task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum InspectionTaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate inspection task identifier: {0}")]
    DuplicateTask(InspectionTaskId),

    /// The task was not found.
    #[error("inspection task not found: {0}")]
    NotFound(InspectionTaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl InspectionTaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
