//! In-memory repository for inspection tasks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::inspection::{
    domain::{InspectionTask, InspectionTaskChanges, InspectionTaskFilter, InspectionTaskId},
    ports::{
        InspectionTaskRepository, InspectionTaskRepositoryError, InspectionTaskRepositoryResult,
    },
};

/// Thread-safe in-memory inspection task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInspectionTaskRepository {
    tasks: Arc<RwLock<HashMap<InspectionTaskId, InspectionTask>>>,
}

impl InMemoryInspectionTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> InspectionTaskRepositoryError {
    InspectionTaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl InspectionTaskRepository for InMemoryInspectionTaskRepository {
    async fn store(&self, task: &InspectionTask) -> InspectionTaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        if tasks.contains_key(&task.id()) {
            return Err(InspectionTaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: InspectionTaskId,
    ) -> InspectionTaskRepositoryResult<Option<InspectionTask>> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        Ok(tasks.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: InspectionTaskFilter,
    ) -> InspectionTaskRepositoryResult<Vec<InspectionTask>> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        Ok(filter.select(tasks.values().cloned()))
    }

    async fn apply_changes(
        &self,
        id: InspectionTaskId,
        changes: &InspectionTaskChanges,
        updated_at: DateTime<Utc>,
    ) -> InspectionTaskRepositoryResult<InspectionTask> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        let task = tasks
            .get_mut(&id)
            .ok_or(InspectionTaskRepositoryError::NotFound(id))?;
        task.apply_changes(changes, updated_at);
        Ok(task.clone())
    }

    async fn delete(&self, id: InspectionTaskId) -> InspectionTaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(InspectionTaskRepositoryError::NotFound(id))
    }
}
