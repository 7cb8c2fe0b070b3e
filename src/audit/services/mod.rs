//! Application services for recording and listing audit entries.

mod query;
mod recorder;

pub use query::{AUDIT_LOG_PAGE_SIZE, AuditLogQueryService};
pub use recorder::AuditRecorder;
