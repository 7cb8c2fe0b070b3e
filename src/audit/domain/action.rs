//! Closed set of audited mutations.

use super::ParseAuditActionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of task mutation recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    /// A task was created.
    #[serde(rename = "Create Task")]
    CreateTask,
    /// A task was updated.
    #[serde(rename = "Update Task")]
    UpdateTask,
    /// A task was deleted.
    #[serde(rename = "Delete Task")]
    DeleteTask,
}

impl AuditAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateTask => "create_task",
            Self::UpdateTask => "update_task",
            Self::DeleteTask => "delete_task",
        }
    }

    /// Returns the human-readable label used on the wire.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreateTask => "Create Task",
            Self::UpdateTask => "Update Task",
            Self::DeleteTask => "Delete Task",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for AuditAction {
    type Error = ParseAuditActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "create_task" | "Create Task" => Ok(Self::CreateTask),
            "update_task" | "Update Task" => Ok(Self::UpdateTask),
            "delete_task" | "Delete Task" => Ok(Self::DeleteTask),
            _ => Err(ParseAuditActionError(value.to_owned())),
        }
    }
}
