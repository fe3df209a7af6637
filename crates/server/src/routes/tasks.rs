use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::get,
};
use db::models::task::{CreateTask, Task, UpdateTask};
use uuid::Uuid;

use super::Message;
use crate::{error::ApiError, extract::Json, state::AppState};

pub async fn get_tasks(State(state): State<AppState>) -> Result<ResponseJson<Vec<Task>>, ApiError> {
    let tasks = state.task().find_all().await?;
    Ok(ResponseJson(tasks))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTask>,
) -> Result<(StatusCode, ResponseJson<Task>), ApiError> {
    tracing::debug!(
        "Creating task '{}' in project {}",
        payload.title,
        payload.project_id
    );
    let task = state.task().create(payload).await?;
    Ok((StatusCode::CREATED, ResponseJson(task)))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<Task>, ApiError> {
    let task = state.task().find_one(id).await?;
    Ok(ResponseJson(task))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTask>,
) -> Result<ResponseJson<Message>, ApiError> {
    state.task().update(id, payload).await?;
    Ok(ResponseJson(Message {
        message: format!("Task <{id}> updated successfully"),
    }))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<Message>, ApiError> {
    state.task().remove(id).await?;
    Ok(ResponseJson(Message {
        message: format!("Task <{id}> deleted successfully"),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(get_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
}
