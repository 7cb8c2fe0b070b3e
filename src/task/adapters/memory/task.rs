//! In-memory repository for tasks.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::pagination::PageWindow;
use crate::task::{
    domain::{SearchTerm, Task, TaskChanges, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, StoredTask>,
    next_sequence: u64,
}

/// Insertion sequence breaks ties between equal creation timestamps.
#[derive(Debug, Clone)]
struct StoredTask {
    task: Task,
    sequence: u64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Returns matching tasks ordered newest first.
fn matching_newest_first<'a>(
    state: &'a InMemoryTaskState,
    search: Option<&SearchTerm>,
) -> Vec<&'a StoredTask> {
    let mut matching: Vec<&StoredTask> = state
        .tasks
        .values()
        .filter(|stored| search.is_none_or(|term| term.matches(&stored.task)))
        .collect();
    matching.sort_by(|left, right| {
        right
            .task
            .created_at()
            .cmp(&left.task.created_at())
            .then(right.sequence.cmp(&left.sequence))
    });
    matching
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.tasks.insert(
            task.id(),
            StoredTask {
                task: task.clone(),
                sequence,
            },
        );
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).map(|stored| stored.task.clone()))
    }

    async fn apply_changes(
        &self,
        id: TaskId,
        changes: &TaskChanges,
    ) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let stored = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        stored.task.apply(changes);
        Ok(stored.task.clone())
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.write()?;
        Ok(state.tasks.remove(&id).map(|stored| stored.task))
    }

    async fn find_page(
        &self,
        search: Option<&SearchTerm>,
        window: PageWindow,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let matching = matching_newest_first(&state, search);
        Ok(window
            .apply(matching)
            .map(|stored| stored.task.clone())
            .collect())
    }

    async fn count_matching(&self, search: Option<&SearchTerm>) -> TaskRepositoryResult<u64> {
        let state = self.read()?;
        let count = state
            .tasks
            .values()
            .filter(|stored| search.is_none_or(|term| term.matches(&stored.task)))
            .count();
        u64::try_from(count).map_err(TaskRepositoryError::persistence)
    }
}
