//! JSON-over-HTTP surface.
//!
//! All routes live under `/api` and require credentials accepted by the
//! configured [`crate::auth::CredentialVerifier`].
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | `GET` | `/api/tasks?page&search` | List tasks, five per page |
//! | `POST` | `/api/tasks` | Create a task |
//! | `PUT` | `/api/tasks/:id` | Update a task |
//! | `DELETE` | `/api/tasks/:id` | Delete a task |
//! | `GET` | `/api/logs?page` | List audit entries, ten per page |

mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::Router;
use axum::routing::{get, put};

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/:id",
            put(handlers::update_task).delete(handlers::delete_task),
        )
        .route("/logs", get(handlers::list_audit_logs))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_credentials,
        ))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .layer(axum::middleware::from_fn(middleware::trace_request))
}
