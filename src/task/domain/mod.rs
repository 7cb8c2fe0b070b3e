//! Domain model for tasks.
//!
//! Tasks carry a sanitised title and description plus an immutable
//! identifier and creation timestamp. Infrastructure concerns stay outside
//! this module.

mod error;
mod fields;
mod ids;
mod search;
mod task;

pub use error::TaskDomainError;
pub use fields::{TaskDescription, TaskField, TaskTitle, sanitize_markup};
pub use ids::TaskId;
pub use search::SearchTerm;
pub use task::{PersistedTaskData, Task, TaskChanges};
