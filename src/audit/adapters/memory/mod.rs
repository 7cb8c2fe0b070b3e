//! In-memory audit log adapter.

mod audit_log;

pub use audit_log::InMemoryAuditLogRepository;
