use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::get,
};
use db::models::project::{CreateProject, Project, UpdateProject};
use db::models::task::Task;
use uuid::Uuid;

use super::Message;
use crate::{error::ApiError, extract::Json, state::AppState};

pub async fn get_projects(
    State(state): State<AppState>,
) -> Result<ResponseJson<Vec<Project>>, ApiError> {
    let projects = state.project().find_all().await?;
    Ok(ResponseJson(projects))
}

pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProject>,
) -> Result<(StatusCode, ResponseJson<Project>), ApiError> {
    tracing::debug!("Creating project '{}'", payload.name);
    let project = state.project().create(payload).await?;
    Ok((StatusCode::CREATED, ResponseJson(project)))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<Project>, ApiError> {
    let project = state.project().find_one(id).await?;
    Ok(ResponseJson(project))
}

pub async fn get_project_tasks(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<Vec<Task>>, ApiError> {
    let tasks = state.project().find_tasks(id).await?;
    Ok(ResponseJson(tasks))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProject>,
) -> Result<ResponseJson<Message>, ApiError> {
    state.project().update(id, payload).await?;
    Ok(ResponseJson(Message {
        message: format!("Project <{id}> updated successfully"),
    }))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<Message>, ApiError> {
    state.project().remove(id).await?;
    Ok(ResponseJson(Message {
        message: format!("Project <{id}> deleted successfully"),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(get_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).patch(update_project).delete(delete_project),
        )
        .route("/projects/{id}/tasks", get(get_project_tasks))
}
