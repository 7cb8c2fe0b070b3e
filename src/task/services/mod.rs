//! Application services for task mutation and listing.

mod mutation;
mod query;

pub use mutation::{
    CreateTaskRequest, TaskMutationError, TaskMutationResult, TaskMutationService,
    UpdateTaskRequest,
};
pub use query::{ListTasksRequest, TASK_PAGE_SIZE, TaskQueryService};
