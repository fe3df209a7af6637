use axum::response::{Html, Json as ResponseJson};
use db::models::project::{CreateProject, Project, UpdateProject};
use db::models::task::{CreateTask, Task, UpdateTask};
use schemars::schema_for;
use serde_json::{Value, json};

use super::Message;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Taskboard API</title>
  <style>
    body {
      margin: 0;
      height: 100vh;
      background: linear-gradient(135deg, #00b4db, #0083b0);
      display: flex;
      align-items: center;
      justify-content: center;
    }
    .overlay {
      background: rgba(0, 0, 0, 0.8);
      padding: 4rem;
      border-radius: 8px;
      text-align: center;
      color: #ffffff;
      font-family: Arial, sans-serif;
    }
    a {
      color: #00b4db;
      text-decoration: none;
      font-weight: bold;
    }
    a:hover {
      text-decoration: underline;
    }
  </style>
</head>
<body>
  <div class="overlay">
    <h1>Welcome to the Taskboard API</h1>
    <p><a href="/docs">View API Documentation</a></p>
  </div>
</body>
</html>"#;

pub async fn serve_root() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn serve_docs() -> ResponseJson<Value> {
    ResponseJson(openapi_document())
}

/// Machine-readable API description; component schemas are derived from the
/// same types the handlers deserialize into.
fn openapi_document() -> Value {
    let not_found = json!({ "description": "Resource not found" });
    let bad_request = json!({ "description": "Invalid input" });
    let server_error = json!({ "description": "Unexpected storage failure" });
    let message_ok = json!({
        "description": "Confirmation message",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Message" } } }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Taskboard API",
            "description": "A simple task management API supporting core CRUD operations around Projects and Tasks, backed by a relational database.",
            "version": "1.0"
        },
        "paths": {
            "/projects": {
                "get": {
                    "tags": ["Projects"],
                    "summary": "List all projects",
                    "responses": {
                        "200": {
                            "description": "All projects",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Project" }
                            } } }
                        },
                        "500": server_error
                    }
                },
                "post": {
                    "tags": ["Projects"],
                    "summary": "Create a project",
                    "requestBody": { "required": true, "content": { "application/json": {
                        "schema": { "$ref": "#/components/schemas/CreateProject" }
                    } } },
                    "responses": {
                        "201": {
                            "description": "The created project",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Project" } } }
                        },
                        "400": bad_request
                    }
                }
            },
            "/projects/{id}": {
                "parameters": [{ "name": "id", "in": "path", "required": true,
                                 "schema": { "type": "string", "format": "uuid" } }],
                "get": {
                    "tags": ["Projects"],
                    "summary": "Fetch one project",
                    "responses": {
                        "200": {
                            "description": "The project",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Project" } } }
                        },
                        "404": not_found
                    }
                },
                "patch": {
                    "tags": ["Projects"],
                    "summary": "Partially update a project",
                    "requestBody": { "required": true, "content": { "application/json": {
                        "schema": { "$ref": "#/components/schemas/UpdateProject" }
                    } } },
                    "responses": { "200": message_ok, "400": bad_request, "404": not_found }
                },
                "delete": {
                    "tags": ["Projects"],
                    "summary": "Delete a project and its tasks",
                    "responses": { "200": message_ok, "404": not_found, "500": server_error }
                }
            },
            "/projects/{id}/tasks": {
                "parameters": [{ "name": "id", "in": "path", "required": true,
                                 "schema": { "type": "string", "format": "uuid" } }],
                "get": {
                    "tags": ["Projects"],
                    "summary": "List the tasks belonging to a project",
                    "responses": {
                        "200": {
                            "description": "The project's tasks (possibly empty)",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Task" }
                            } } }
                        },
                        "404": not_found
                    }
                }
            },
            "/tasks": {
                "get": {
                    "tags": ["Tasks"],
                    "summary": "List all tasks",
                    "responses": {
                        "200": {
                            "description": "All tasks across all projects",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Task" }
                            } } }
                        },
                        "500": server_error
                    }
                },
                "post": {
                    "tags": ["Tasks"],
                    "summary": "Create a task in an existing project",
                    "requestBody": { "required": true, "content": { "application/json": {
                        "schema": { "$ref": "#/components/schemas/CreateTask" }
                    } } },
                    "responses": {
                        "201": {
                            "description": "The created task",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Task" } } }
                        },
                        "400": bad_request,
                        "404": { "description": "Referenced project not found" }
                    }
                }
            },
            "/tasks/{id}": {
                "parameters": [{ "name": "id", "in": "path", "required": true,
                                 "schema": { "type": "string", "format": "uuid" } }],
                "get": {
                    "tags": ["Tasks"],
                    "summary": "Fetch one task",
                    "responses": {
                        "200": {
                            "description": "The task",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Task" } } }
                        },
                        "404": not_found
                    }
                },
                "patch": {
                    "tags": ["Tasks"],
                    "summary": "Partially update a task",
                    "requestBody": { "required": true, "content": { "application/json": {
                        "schema": { "$ref": "#/components/schemas/UpdateTask" }
                    } } },
                    "responses": { "200": message_ok, "400": bad_request, "404": not_found }
                },
                "delete": {
                    "tags": ["Tasks"],
                    "summary": "Delete a task",
                    "responses": { "200": message_ok, "404": not_found, "500": server_error }
                }
            },
            "/health": {
                "get": {
                    "tags": ["Meta"],
                    "summary": "Liveness probe",
                    "responses": { "200": { "description": "Service is up" } }
                }
            }
        },
        "components": {
            "schemas": {
                "Project": schema_for!(Project),
                "CreateProject": schema_for!(CreateProject),
                "UpdateProject": schema_for!(UpdateProject),
                "Task": schema_for!(Task),
                "CreateTask": schema_for!(CreateTask),
                "UpdateTask": schema_for!(UpdateTask),
                "Message": schema_for!(Message),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_covers_every_route() {
        let doc = openapi_document();
        let paths = doc.get("paths").and_then(Value::as_object).unwrap();

        for path in [
            "/projects",
            "/projects/{id}",
            "/projects/{id}/tasks",
            "/tasks",
            "/tasks/{id}",
            "/health",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }

        let schemas = doc
            .pointer("/components/schemas")
            .and_then(Value::as_object)
            .unwrap();
        for schema in ["Project", "Task", "CreateTask", "Message"] {
            assert!(schemas.contains_key(schema), "missing schema {schema}");
        }
    }
}
