//! Paged listing of audit log entries.

use crate::audit::{
    domain::AuditLogEntry,
    ports::{AuditLogRepository, AuditLogRepositoryResult},
};
use crate::pagination::{Page, PageNumber, PageSize, PageWindow};
use std::sync::Arc;

/// Entries per audit log page.
pub const AUDIT_LOG_PAGE_SIZE: PageSize = PageSize::new(10);

/// Read-side service for the audit log.
pub struct AuditLogQueryService<L>
where
    L: AuditLogRepository + ?Sized,
{
    repository: Arc<L>,
}

impl<L> AuditLogQueryService<L>
where
    L: AuditLogRepository + ?Sized,
{
    /// Creates a new audit log query service.
    #[must_use]
    pub const fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Returns one page of entries, newest first.
    ///
    /// A page past the end yields no items rather than an error.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the store cannot be read.
    pub async fn list(&self, page: PageNumber) -> AuditLogRepositoryResult<Page<AuditLogEntry>> {
        let window = PageWindow::new(page, AUDIT_LOG_PAGE_SIZE);
        let items = self.repository.find_page(window).await?;
        let total = self.repository.count().await?;
        Ok(Page::new(items, page, total, AUDIT_LOG_PAGE_SIZE))
    }
}
