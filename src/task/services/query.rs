//! Paged, searchable task listing.

use crate::pagination::{Page, PageNumber, PageSize, PageWindow};
use crate::task::{
    domain::{SearchTerm, Task},
    ports::{TaskRepository, TaskRepositoryResult},
};
use std::sync::Arc;

/// Tasks per page.
pub const TASK_PAGE_SIZE: PageSize = PageSize::new(5);

/// Listing parameters for [`TaskQueryService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksRequest {
    page: PageNumber,
    search: Option<SearchTerm>,
}

impl ListTasksRequest {
    /// Requests `page` of all tasks.
    #[must_use]
    pub const fn new(page: PageNumber) -> Self {
        Self { page, search: None }
    }

    /// Restricts the listing to tasks matching `search`.
    #[must_use]
    pub fn with_search(mut self, search: Option<SearchTerm>) -> Self {
        self.search = search;
        self
    }
}

/// Read-side service for tasks.
pub struct TaskQueryService<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> TaskQueryService<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates a new task query service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns one page of tasks, newest first, matching the optional
    /// case-insensitive search term against title or description.
    ///
    /// A page past the end yields no items rather than an error.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the store cannot be read.
    pub async fn list(&self, request: ListTasksRequest) -> TaskRepositoryResult<Page<Task>> {
        let ListTasksRequest { page, search } = request;
        let window = PageWindow::new(page, TASK_PAGE_SIZE);
        let items = self.repository.find_page(search.as_ref(), window).await?;
        let total = self.repository.count_matching(search.as_ref()).await?;
        Ok(Page::new(items, page, total, TASK_PAGE_SIZE))
    }
}
