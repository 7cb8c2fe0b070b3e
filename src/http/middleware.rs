//! Request tracing and credential enforcement layers.

use super::{ApiError, AppState};
use crate::auth::authenticate;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{Instrument, debug, warn};

/// Wraps each request in an `http.request` span and logs its status.
pub(crate) async fn trace_request(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_owned();
    let span = tracing::info_span!("http.request", method = %method, route = %route);

    async move {
        let response = next.run(request).await;
        debug!(status = response.status().as_u16(), "request completed");
        response
    }
    .instrument(span)
    .await
}

/// Rejects requests whose `Authorization` header fails the configured
/// credential check.
pub(crate) async fn require_credentials(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    match authenticate(state.verifier(), header) {
        Ok(()) => next.run(request).await,
        Err(reason) => {
            warn!(reason = %reason, "request rejected by credential check");
            ApiError::from(reason).into_response()
        }
    }
}
