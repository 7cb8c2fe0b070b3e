//! Immutable audit record of one task mutation.

use super::{AuditAction, AuditLogId, ChangeSet};
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One audit log entry. Created once, never updated.
///
/// `task_id` is a weak reference: the task may since have been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    id: AuditLogId,
    timestamp: DateTime<Utc>,
    action: AuditAction,
    task_id: TaskId,
    change_set: ChangeSet,
}

/// Parameter object for reconstructing a persisted audit entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAuditLogData {
    /// Persisted entry identifier.
    pub id: AuditLogId,
    /// Persisted recording time.
    pub timestamp: DateTime<Utc>,
    /// Persisted action.
    pub action: AuditAction,
    /// Persisted task reference.
    pub task_id: TaskId,
    /// Persisted change set.
    pub change_set: ChangeSet,
}

impl AuditLogEntry {
    /// Creates an entry stamped with the current clock time.
    #[must_use]
    pub fn new(
        action: AuditAction,
        task_id: TaskId,
        change_set: ChangeSet,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: AuditLogId::new(),
            timestamp: clock.utc(),
            action,
            task_id,
            change_set,
        }
    }

    /// Reconstructs an entry from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAuditLogData) -> Self {
        Self {
            id: data.id,
            timestamp: data.timestamp,
            action: data.action,
            task_id: data.task_id,
            change_set: data.change_set,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> AuditLogId {
        self.id
    }

    /// Returns the recording time.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the audited action.
    #[must_use]
    pub const fn action(&self) -> AuditAction {
        self.action
    }

    /// Returns the affected task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the recorded change set.
    #[must_use]
    pub const fn change_set(&self) -> &ChangeSet {
        &self.change_set
    }
}
