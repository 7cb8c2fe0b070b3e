//! Mapping of service failures onto HTTP responses.

use super::dto::ErrorBody;
use crate::audit::ports::AuditLogRepositoryError;
use crate::auth::AuthError;
use crate::task::{
    domain::TaskDomainError, ports::TaskRepositoryError, services::TaskMutationError,
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// A caller-facing failure.
///
/// Store failures keep their cause in the logs only; the response body is
/// a generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Bad input (400).
    Validation {
        /// Summary shown to the caller.
        message: String,
        /// Specific reason, if any.
        details: Option<String>,
    },
    /// Unknown task (404).
    NotFound,
    /// Failed credential check (401).
    Unauthorized(AuthError),
    /// Backing store failure (500).
    Internal,
}

impl ApiError {
    /// Maps a mutation failure, using `context` as the summary for
    /// field-level validation errors.
    #[must_use]
    pub fn from_mutation(err: TaskMutationError, context: &str) -> Self {
        match err {
            TaskMutationError::Validation(TaskDomainError::MissingRequiredFields) => {
                Self::Validation {
                    message: TaskDomainError::MissingRequiredFields.to_string(),
                    details: None,
                }
            }
            TaskMutationError::Validation(TaskDomainError::InvalidTaskId(_))
            | TaskMutationError::NotFound(_) => Self::NotFound,
            TaskMutationError::Validation(other) => Self::Validation {
                message: context.to_owned(),
                details: Some(other.to_string()),
            },
            TaskMutationError::Repository(err) => Self::from(err),
        }
    }

    /// Maps a rejected JSON body.
    #[must_use]
    pub fn invalid_body(rejection: &JsonRejection) -> Self {
        Self::Validation {
            message: "Invalid request body.".to_owned(),
            details: Some(rejection.body_text()),
        }
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskRepositoryError> for ApiError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(_) => Self::NotFound,
            other => {
                error!(error = %other, "task store failure");
                Self::Internal
            }
        }
    }
}

impl From<AuditLogRepositoryError> for ApiError {
    fn from(err: AuditLogRepositoryError) -> Self {
        error!(error = %err, "audit log store failure");
        Self::Internal
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Unauthorized(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation { message, details } => ErrorBody {
                error: message,
                details,
            },
            Self::NotFound => ErrorBody::new("Task not found."),
            Self::Unauthorized(reason) => ErrorBody::new(reason.to_string()),
            Self::Internal => ErrorBody::new("Server error"),
        };
        (status, Json(body)).into_response()
    }
}
