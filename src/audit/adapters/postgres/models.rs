//! Diesel row models for audit log persistence.

use super::schema::audit_logs;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for audit log records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = audit_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuditLogRow {
    /// Entry identifier.
    pub id: uuid::Uuid,
    /// Canonical action name.
    pub action: String,
    /// Affected task identifier.
    pub task_id: uuid::Uuid,
    /// Change set JSON object.
    pub change_set: Value,
    /// Recording timestamp.
    pub recorded_at: DateTime<Utc>,
}

/// Insert model for audit log records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = audit_logs)]
pub struct NewAuditLogRow {
    /// Entry identifier.
    pub id: uuid::Uuid,
    /// Canonical action name.
    pub action: String,
    /// Affected task identifier.
    pub task_id: uuid::Uuid,
    /// Change set JSON object.
    pub change_set: Value,
    /// Recording timestamp.
    pub recorded_at: DateTime<Utc>,
}
