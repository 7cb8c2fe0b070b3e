//! Mutation pipeline for tasks.
//!
//! Each operation runs validate → sanitise → diff → persist → audit. The
//! audit step is dispatched through [`AuditRecorder`] after the task write
//! has been applied, and its outcome never reaches the caller.
//!
//! Updates read the stored task, compare, then write. Concurrent updates of
//! the same task are last-writer-wins; there is no version check.

use crate::audit::{
    domain::{AuditAction, ChangeSet},
    ports::AuditLogRepository,
    services::AuditRecorder,
};
use crate::task::{
    domain::{Task, TaskChanges, TaskDescription, TaskDomainError, TaskField, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: Option<String>,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with both fields present.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
        }
    }

    /// Creates a request from optionally supplied fields.
    #[must_use]
    pub const fn from_parts(title: Option<String>, description: Option<String>) -> Self {
        Self { title, description }
    }
}

/// Request payload for updating a task. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a request from optionally supplied fields.
    #[must_use]
    pub const fn from_parts(title: Option<String>, description: Option<String>) -> Self {
        Self { title, description }
    }

    /// Sets the submitted title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the submitted description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task mutations.
#[derive(Debug, Error)]
pub enum TaskMutationError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// The target task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskMutationError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task mutation operations.
pub type TaskMutationResult<T> = Result<T, TaskMutationError>;

/// Orchestrates task writes and their audit records.
pub struct TaskMutationService<R, L, C>
where
    R: TaskRepository + ?Sized,
    L: AuditLogRepository + ?Sized + 'static,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    recorder: AuditRecorder<L, C>,
    clock: Arc<C>,
}

impl<R, L, C> TaskMutationService<R, L, C>
where
    R: TaskRepository + ?Sized,
    L: AuditLogRepository + ?Sized + 'static,
    C: Clock + Send + Sync,
{
    /// Creates a new mutation service.
    #[must_use]
    pub const fn new(repository: Arc<R>, recorder: AuditRecorder<L, C>, clock: Arc<C>) -> Self {
        Self {
            repository,
            recorder,
            clock,
        }
    }

    /// Returns the recorder used for audit writes.
    #[must_use]
    pub const fn recorder(&self) -> &AuditRecorder<L, C> {
        &self.recorder
    }

    /// Creates a task and records a `CreateTask` entry carrying both
    /// sanitised fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::Validation`] when a field is missing,
    /// blank, or too long, and [`TaskMutationError::Repository`] when the
    /// store rejects the write.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskMutationResult<Task> {
        let CreateTaskRequest {
            title: Some(raw_title),
            description: Some(raw_description),
        } = request
        else {
            return Err(TaskDomainError::MissingRequiredFields.into());
        };
        if raw_title.is_empty() || raw_description.is_empty() {
            return Err(TaskDomainError::MissingRequiredFields.into());
        }

        let title = TaskTitle::new(raw_title)?;
        let description = TaskDescription::new(raw_description)?;
        let task = Task::new(title, description, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), "task created");

        let change_set = ChangeSet::new()
            .with_field(TaskField::Title.as_str(), task.title().as_str())
            .with_field(TaskField::Description.as_str(), task.description().as_str());
        self.recorder
            .record(AuditAction::CreateTask, task.id(), change_set);
        Ok(task)
    }

    /// Applies the submitted fields that differ from the stored task.
    /// Fields submitted as empty strings are ignored.
    ///
    /// When nothing differs the stored task is returned as is, without a
    /// write or an audit entry. Otherwise only the changed fields are written
    /// and recorded in an `UpdateTask` entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::NotFound`] when the task does not exist,
    /// [`TaskMutationError::Validation`] when a submitted field is invalid,
    /// and [`TaskMutationError::Repository`] on store failures.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskMutationResult<Task> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskMutationError::NotFound(id))?;

        // An empty string is treated as an omitted field.
        let title = request
            .title
            .filter(|value| !value.is_empty())
            .map(TaskTitle::new)
            .transpose()?;
        let description = request
            .description
            .filter(|value| !value.is_empty())
            .map(TaskDescription::new)
            .transpose()?;
        let changes = TaskChanges::between(&current, title, description);
        if changes.is_empty() {
            debug!(task_id = %id, "update left task unchanged");
            return Ok(current);
        }

        let updated = self.repository.apply_changes(id, &changes).await?;
        info!(task_id = %id, "task updated");
        self.recorder
            .record(AuditAction::UpdateTask, id, change_set_for(&changes));
        Ok(updated)
    }

    /// Deletes a task and records a `DeleteTask` entry with an empty change
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::NotFound`] when the task does not exist
    /// and [`TaskMutationError::Repository`] on store failures.
    pub async fn delete(&self, id: TaskId) -> TaskMutationResult<()> {
        let removed = self
            .repository
            .remove(id)
            .await?
            .ok_or(TaskMutationError::NotFound(id))?;
        info!(task_id = %removed.id(), "task deleted");
        self.recorder
            .record(AuditAction::DeleteTask, removed.id(), ChangeSet::new());
        Ok(())
    }
}

fn change_set_for(changes: &TaskChanges) -> ChangeSet {
    let mut change_set = ChangeSet::new();
    if let Some(title) = changes.title() {
        change_set.insert(TaskField::Title.as_str(), title.as_str());
    }
    if let Some(description) = changes.description() {
        change_set.insert(TaskField::Description.as_str(), description.as_str());
    }
    change_set
}
