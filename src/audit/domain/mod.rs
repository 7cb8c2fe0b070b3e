//! Domain model for the audit log.
//!
//! Entries are append-only records of task mutations. Their change sets
//! hold the full submitted field set for creations, only the changed fields
//! for updates, and nothing for deletions.

mod action;
mod change_set;
mod entry;
mod error;
mod ids;

pub use action::AuditAction;
pub use change_set::ChangeSet;
pub use entry::{AuditLogEntry, PersistedAuditLogData};
pub use error::ParseAuditActionError;
pub use ids::AuditLogId;
