//! Repository port for task persistence and listing.

use crate::pagination::PageWindow;
use crate::task::domain::{SearchTerm, Task, TaskChanges, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Each operation is a single-document write or read; the store's own
/// atomicity is the only coordination between concurrent callers.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Writes only the fields present in `changes` and returns the
    /// resulting task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn apply_changes(&self, id: TaskId, changes: &TaskChanges)
    -> TaskRepositoryResult<Task>;

    /// Removes a task, returning it when it existed.
    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks inside `window`, newest first, optionally filtered
    /// by `search`.
    async fn find_page(
        &self,
        search: Option<&SearchTerm>,
        window: PageWindow,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts the tasks matching `search` (all tasks when `None`).
    async fn count_matching(&self, search: Option<&SearchTerm>) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
