//! Port contracts for audit log storage.

pub mod repository;

pub use repository::{AuditLogRepository, AuditLogRepositoryError, AuditLogRepositoryResult};
