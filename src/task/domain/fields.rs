//! Validated title and description values.
//!
//! Both fields go through the same normalisation: markup brackets are
//! escaped, surrounding whitespace is trimmed, and the result must be
//! non-empty and within the field's character bound.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Escapes `<` and `>` so stored text cannot carry markup.
///
/// The escape is idempotent: already escaped text is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use taskledger::task::domain::sanitize_markup;
///
/// assert_eq!(sanitize_markup("<script>"), "&lt;script&gt;");
/// assert_eq!(sanitize_markup("&lt;b&gt;"), "&lt;b&gt;");
/// ```
#[must_use]
pub fn sanitize_markup(value: &str) -> String {
    value.replace('<', "&lt;").replace('>', "&gt;")
}

/// Names of the mutable task fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The task title.
    Title,
    /// The task description.
    Description,
}

impl TaskField {
    /// Returns the field name used in change sets and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(field: TaskField, raw: &str, max: usize) -> Result<String, TaskDomainError> {
    let sanitized = sanitize_markup(raw);
    let trimmed = sanitized.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyField(field));
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(TaskDomainError::FieldTooLong { field, max, actual });
    }
    Ok(trimmed.to_owned())
}

/// Sanitised task title, 1 to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Maximum title length in characters.
    pub const MAX_CHARS: usize = 100;

    /// Sanitises and validates a title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyField`] for blank input and
    /// [`TaskDomainError::FieldTooLong`] when the sanitised value exceeds
    /// [`Self::MAX_CHARS`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        normalize(TaskField::Title, value.as_ref(), Self::MAX_CHARS).map(Self)
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitised task description, 1 to 500 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Maximum description length in characters.
    pub const MAX_CHARS: usize = 500;

    /// Sanitises and validates a description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyField`] for blank input and
    /// [`TaskDomainError::FieldTooLong`] when the sanitised value exceeds
    /// [`Self::MAX_CHARS`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        normalize(TaskField::Description, value.as_ref(), Self::MAX_CHARS).map(Self)
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
