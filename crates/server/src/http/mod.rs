use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{routes, state::AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::docs::serve_root))
        .route("/docs", get(routes::docs::serve_docs))
        .route("/health", get(routes::health::health_check))
        .merge(routes::projects::router())
        .merge(routes::tasks::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::state::AppState;

    async fn app() -> Router {
        let db = test_support::sqlite_db().await;
        super::router(AppState::new(db))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn project_lifecycle_end_to_end() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(json_request("POST", "/projects", json!({"name": "E2E Project"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let id = created.get("id").and_then(Value::as_str).unwrap().to_string();
        assert!(!id.is_empty());

        let response = app.clone().oneshot(get_request("/projects")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        assert!(
            listed
                .as_array()
                .unwrap()
                .iter()
                .any(|p| p.get("id").and_then(Value::as_str) == Some(id.as_str()))
        );

        let response = app
            .clone()
            .oneshot(json_request(
                "PATCH",
                &format!("/projects/{id}"),
                json!({"name": "Updated"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let confirmation = body_json(response).await;
        assert_eq!(
            confirmation.get("message").and_then(Value::as_str),
            Some(format!("Project <{id}> updated successfully").as_str())
        );

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/projects/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request(&format!("/projects/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn task_creation_with_valid_and_missing_project() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(json_request("POST", "/projects", json!({"name": "Host"})))
            .await
            .unwrap();
        let project_id = body_json(response)
            .await
            .get("id")
            .and_then(Value::as_str)
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/tasks",
                json!({"projectId": project_id, "title": "E2E Task", "status": "todo"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let task = body_json(response).await;
        assert_eq!(
            task.get("project_id").and_then(Value::as_str),
            Some(project_id.as_str())
        );

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/tasks",
                json!({"projectId": Uuid::new_v4(), "title": "Orphan", "status": "todo"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // The rejected task was never persisted.
        let response = app.oneshot(get_request("/tasks")).await.unwrap();
        let tasks = body_json(response).await;
        assert_eq!(tasks.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn tasks_of_project_returns_empty_set_or_not_found() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(json_request("POST", "/projects", json!({"name": "Empty"})))
            .await
            .unwrap();
        let project_id = body_json(response)
            .await
            .get("id")
            .and_then(Value::as_str)
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(get_request(&format!("/projects/{project_id}/tasks")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await.as_array().unwrap().is_empty());

        let response = app
            .oneshot(get_request(&format!("/projects/{}/tasks", Uuid::new_v4())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_fields_are_rejected_with_bad_request() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/projects",
                json!({"name": "x", "owner": "nobody"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body.get("statusCode").and_then(Value::as_u64),
            Some(400)
        );
    }

    #[tokio::test]
    async fn invalid_status_values_are_rejected_with_bad_request() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(json_request("POST", "/projects", json!({"name": "Host"})))
            .await
            .unwrap();
        let project_id = body_json(response)
            .await
            .get("id")
            .and_then(Value::as_str)
            .unwrap()
            .to_string();

        for status in ["Todo", "IN_PROGRESS", "blocked"] {
            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/tasks",
                    json!({"projectId": project_id, "title": "t", "status": status}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "status {status}");
        }
    }

    #[tokio::test]
    async fn empty_name_is_rejected_with_bad_request() {
        let app = app().await;

        let response = app
            .oneshot(json_request("POST", "/projects", json!({"name": "  "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn patch_and_delete_on_missing_ids_return_not_found() {
        let app = app().await;
        let missing = Uuid::new_v4();

        let response = app
            .clone()
            .oneshot(json_request(
                "PATCH",
                &format!("/tasks/{missing}"),
                json!({"status": "done"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/tasks/{missing}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn root_page_and_docs_are_served() {
        let app = app().await;

        let response = app.clone().oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"));

        let response = app.clone().oneshot(get_request("/docs")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_json(response).await;
        assert!(doc.get("openapi").is_some());

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
