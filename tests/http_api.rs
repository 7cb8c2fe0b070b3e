//! End-to-end HTTP tests over in-memory stores.

mod support;

use axum::http::{Method, StatusCode};
use eyre::{Result, eyre};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use support::{TestApp, basic};

#[fixture]
fn app() -> TestApp {
    TestApp::in_memory()
}

async fn create(app: &TestApp, title: &str, description: &str) -> Result<Value> {
    let (status, body) = app
        .send(
            Method::POST,
            "/api/tasks",
            Some(json!({"title": title, "description": description})),
        )
        .await?;
    if status != StatusCode::CREATED {
        return Err(eyre!("create returned {status}: {body}"));
    }
    Ok(body)
}

fn id_of(task: &Value) -> Result<&str> {
    task["id"].as_str().ok_or_else(|| eyre!("task has no id"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_update_and_audit_a_task(app: TestApp) -> Result<()> {
    let created = create(&app, "Buy milk", "2 liters").await?;
    assert_eq!(created["title"], "Buy milk");
    assert_eq!(created["description"], "2 liters");
    assert!(created["createdAt"].is_string());
    let id = id_of(&created)?;

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/tasks/{id}"),
            Some(json!({"title": "Buy milk", "description": "3 liters"})),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["description"], "3 liters");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    app.state.flush_audit_log().await;
    let (status, logs) = app.send(Method::GET, "/api/logs", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logs["currentPage"], 1);
    assert_eq!(logs["totalPages"], 1);
    let entries = &logs["logs"];
    assert_eq!(entries.as_array().map(Vec::len), Some(2));
    assert_eq!(entries[0]["action"], "Update Task");
    assert_eq!(entries[0]["taskId"], id);
    assert!(entries[0]["timestamp"].is_string());
    assert_eq!(entries[0]["changeSet"], json!({"description": "3 liters"}));
    assert_eq!(entries[1]["action"], "Create Task");
    assert_eq!(
        entries[1]["changeSet"],
        json!({"title": "Buy milk", "description": "2 liters"})
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn markup_is_escaped_on_create(app: TestApp) -> Result<()> {
    let created = create(&app, "<script>", "x").await?;
    assert_eq!(created["title"], "&lt;script&gt;");
    Ok(())
}

#[rstest]
#[case(json!({"title": "only title"}))]
#[case(json!({"description": "only description"}))]
#[case(json!({"title": "", "description": "d"}))]
#[tokio::test(flavor = "multi_thread")]
async fn create_without_both_fields_is_rejected(
    app: TestApp,
    #[case] payload: Value,
) -> Result<()> {
    let (status, body) = app.send(Method::POST, "/api/tasks", Some(payload)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Title and description are required."}));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overlong_title_is_a_validation_error(app: TestApp) -> Result<()> {
    let (status, body) = app
        .send(
            Method::POST,
            "/api/tasks",
            Some(json!({"title": "t".repeat(101), "description": "d"})),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Failed to create task.");
    assert!(body["details"].is_string());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_body_is_a_validation_error(app: TestApp) -> Result<()> {
    let (status, body) = app
        .send(Method::POST, "/api/tasks", Some(json!(["not", "an", "object"])))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body.");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unchanged_update_adds_no_log_entry(app: TestApp) -> Result<()> {
    let created = create(&app, "Read", "chapter 4").await?;
    let id = id_of(&created)?;

    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/api/tasks/{id}"),
            Some(json!({"title": "Read", "description": "chapter 4"})),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    app.state.flush_audit_log().await;
    let (_, logs) = app.send(Method::GET, "/api/logs", None).await?;
    assert_eq!(logs["logs"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[rstest]
#[case(Method::PUT, Some(json!({"title": "x"})))]
#[case(Method::DELETE, None)]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_is_not_found(
    app: TestApp,
    #[case] method: Method,
    #[case] payload: Option<Value>,
) -> Result<()> {
    for id in ["6b1f2c1e-5a0e-4a4e-9f0e-1c2d3e4f5a6b", "not-a-uuid"] {
        let (status, body) = app
            .send(method.clone(), &format!("/api/tasks/{id}"), payload.clone())
            .await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Task not found."}));
    }

    app.state.flush_audit_log().await;
    let (_, logs) = app.send(Method::GET, "/api/logs", None).await?;
    assert_eq!(logs["logs"], json!([]));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_returns_confirmation_and_logs(app: TestApp) -> Result<()> {
    let created = create(&app, "Temp", "soon gone").await?;
    let id = id_of(&created)?;

    let (status, body) = app
        .send(Method::DELETE, &format!("/api/tasks/{id}"), None)
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task deleted successfully"}));

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/tasks/{id}"), None)
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.state.flush_audit_log().await;
    let (_, logs) = app.send(Method::GET, "/api/logs", None).await?;
    assert_eq!(logs["logs"][0]["action"], "Delete Task");
    assert_eq!(logs["logs"][0]["changeSet"], json!({}));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_pages_and_searches(app: TestApp) -> Result<()> {
    for title in [
        "Bread 1", "Milk 2", "Bread 3", "Milk 4", "Bread 5", "Milk 6", "Bread 7",
    ] {
        create(&app, title, "groceries").await?;
    }

    let (status, first) = app.send(Method::GET, "/api/tasks", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["tasks"].as_array().map(Vec::len), Some(5));
    assert_eq!(first["tasks"][0]["title"], "Bread 7");
    assert_eq!(first["currentPage"], 1);
    assert_eq!(first["totalPages"], 2);

    let (_, second) = app.send(Method::GET, "/api/tasks?page=2", None).await?;
    assert_eq!(second["tasks"].as_array().map(Vec::len), Some(2));

    let (_, beyond) = app.send(Method::GET, "/api/tasks?page=9", None).await?;
    assert_eq!(beyond["tasks"], json!([]));
    assert_eq!(beyond["currentPage"], 9);

    let (status, far) = app
        .send(Method::GET, "/api/tasks?page=18446744073709551615", None)
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(far["tasks"], json!([]));
    assert_eq!(far["currentPage"], json!(u64::MAX));

    let (_, lenient) = app.send(Method::GET, "/api/tasks?page=abc", None).await?;
    assert_eq!(lenient["currentPage"], 1);

    let (_, found) = app.send(Method::GET, "/api/tasks?search=MILK", None).await?;
    assert_eq!(found["tasks"].as_array().map(Vec::len), Some(3));
    assert_eq!(found["totalPages"], 1);
    assert_eq!(found["tasks"][0]["title"], "Milk 6");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn requests_without_valid_credentials_are_rejected(app: TestApp) -> Result<()> {
    let (status, body) = app
        .send_with_auth(Method::GET, "/api/tasks", None, None)
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["error"],
        "Unauthorized access. Please provide valid credentials."
    );

    let wrong = basic("operator", "guess");
    let (status, _) = app
        .send_with_auth(Method::GET, "/api/logs", None, Some(&wrong))
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .send_with_auth(Method::GET, "/api/tasks", None, Some("Bearer token"))
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Malformed authorization header.");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_create_writes_nothing(app: TestApp) -> Result<()> {
    let (status, _) = app
        .send_with_auth(
            Method::POST,
            "/api/tasks",
            Some(json!({"title": "t", "description": "d"})),
            None,
        )
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, list) = app.send(Method::GET, "/api/tasks", None).await?;
    assert_eq!(list["tasks"], json!([]));
    assert_eq!(list["totalPages"], 0);
    Ok(())
}
