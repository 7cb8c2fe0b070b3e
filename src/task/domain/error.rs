//! Error types for task domain validation and parsing.

use super::TaskField;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A create request omitted the title or the description.
    #[error("Title and description are required.")]
    MissingRequiredFields,

    /// A field is empty after trimming.
    #[error("{0} must not be empty")]
    EmptyField(TaskField),

    /// A field exceeds its length bound after sanitising and trimming.
    #[error("{field} must be at most {max} characters, got {actual}")]
    FieldTooLong {
        /// The offending field.
        field: TaskField,
        /// Maximum permitted characters.
        max: usize,
        /// Characters supplied.
        actual: usize,
    },

    /// The task identifier is not a valid UUID.
    #[error("invalid task identifier: {0}")]
    InvalidTaskId(String),
}
