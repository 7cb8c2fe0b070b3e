//! JSON request and response bodies.

use crate::audit::domain::{AuditAction, AuditLogEntry, AuditLogId, ChangeSet};
use crate::pagination::Page;
use crate::task::domain::{Task, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /tasks` and `PUT /tasks/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TaskPayload {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
}

/// Query string of `GET /tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ListTasksQuery {
    pub(crate) page: Option<String>,
    pub(crate) search: Option<String>,
}

/// Query string of `GET /logs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ListLogsQuery {
    pub(crate) page: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskResponse {
    id: TaskId,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            created_at: task.created_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskPageResponse {
    tasks: Vec<TaskResponse>,
    current_page: u64,
    total_pages: u64,
}

impl From<Page<Task>> for TaskPageResponse {
    fn from(page: Page<Task>) -> Self {
        Self {
            current_page: page.current_page().value(),
            total_pages: page.total_pages(),
            tasks: page.items().iter().map(TaskResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuditLogResponse {
    id: AuditLogId,
    timestamp: DateTime<Utc>,
    action: AuditAction,
    task_id: TaskId,
    change_set: ChangeSet,
}

impl From<AuditLogEntry> for AuditLogResponse {
    fn from(entry: AuditLogEntry) -> Self {
        Self {
            id: entry.id(),
            timestamp: entry.timestamp(),
            action: entry.action(),
            task_id: entry.task_id(),
            change_set: entry.change_set().clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuditLogPageResponse {
    logs: Vec<AuditLogResponse>,
    current_page: u64,
    total_pages: u64,
}

impl From<Page<AuditLogEntry>> for AuditLogPageResponse {
    fn from(page: Page<AuditLogEntry>) -> Self {
        let current_page = page.current_page().value();
        let total_pages = page.total_pages();
        Self {
            logs: page
                .into_items()
                .into_iter()
                .map(AuditLogResponse::from)
                .collect(),
            current_page,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct MessageResponse {
    message: &'static str,
}

impl MessageResponse {
    pub(crate) const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) details: Option<String>,
}

impl ErrorBody {
    pub(crate) fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}
