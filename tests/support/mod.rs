//! Shared fixtures for integration tests.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use eyre::{Result, WrapErr};
use serde_json::Value;
use std::sync::Arc;
use taskledger::audit::adapters::memory::InMemoryAuditLogRepository;
use taskledger::auth::{Credentials, StaticCredentialVerifier};
use taskledger::http::{AppState, router};
use taskledger::task::adapters::memory::InMemoryTaskRepository;
use tower::ServiceExt;

pub const USERNAME: &str = "operator";
pub const PASSWORD: &str = "s3cret:with:colons";

/// Router over fresh in-memory stores plus the state used to flush audits.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub fn in_memory() -> Self {
        let state = AppState::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryAuditLogRepository::new()),
            Arc::new(StaticCredentialVerifier::new(Credentials::new(
                USERNAME, PASSWORD,
            ))),
        );
        Self {
            router: router(state.clone()),
            state,
        }
    }

    /// Sends an authenticated request and decodes the JSON response.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        self.send_with_auth(method, uri, body, Some(&basic(USERNAME, PASSWORD)))
            .await
    }

    pub async fn send_with_auth(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .wrap_err("router call")?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).wrap_err("response is not JSON")?
        };
        Ok((status, json))
    }
}

pub fn basic(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
