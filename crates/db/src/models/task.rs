use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::task;
pub use crate::types::TaskStatus;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Task {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// `projectId` is camelCase on the wire while everything else is snake_case;
// the request DTO has always been shaped this way.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTask {
    #[serde(rename = "projectId")]
    pub project_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
}

/// Patch payload; only fields that are present are written.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTask {
    #[serde(rename = "projectId")]
    pub project_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    fn from_model(model: task::Model) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            title: model.title,
            description: model.description,
            status: model.status,
            due_date: model.due_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Self>, DbErr> {
        let records = task::Entity::find()
            .order_by_desc(task::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(records.into_iter().map(Self::from_model).collect())
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Self>, DbErr> {
        let record = task::Entity::find()
            .filter(task::Column::Id.eq(id))
            .one(db)
            .await?;
        Ok(record.map(Self::from_model))
    }

    pub async fn find_by_project_id<C: ConnectionTrait>(
        db: &C,
        project_id: Uuid,
    ) -> Result<Vec<Self>, DbErr> {
        let records = task::Entity::find()
            .filter(task::Column::ProjectId.eq(project_id))
            .order_by_desc(task::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(records.into_iter().map(Self::from_model).collect())
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        data: &CreateTask,
        task_id: Uuid,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        let active = task::ActiveModel {
            id: Set(task_id),
            project_id: Set(data.project_id),
            title: Set(data.title.clone()),
            description: Set(data.description.clone()),
            status: Set(data.status.clone()),
            due_date: Set(data.due_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(db).await?;
        Ok(Self::from_model(model))
    }

    /// Single-statement patch; absence is reported via the affected-row
    /// count.
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
        payload: &UpdateTask,
    ) -> Result<u64, DbErr> {
        let mut update = task::Entity::update_many().filter(task::Column::Id.eq(id));
        if let Some(project_id) = payload.project_id {
            update = update.col_expr(task::Column::ProjectId, Expr::value(project_id));
        }
        if let Some(title) = &payload.title {
            update = update.col_expr(task::Column::Title, Expr::value(title.clone()));
        }
        if payload.description.is_some() {
            update = update.col_expr(
                task::Column::Description,
                Expr::value(payload.description.clone()),
            );
        }
        if let Some(status) = &payload.status {
            update = update.col_expr(task::Column::Status, Expr::value(status.clone()));
        }
        if payload.due_date.is_some() {
            update = update.col_expr(task::Column::DueDate, Expr::value(payload.due_date));
        }
        update = update.col_expr(task::Column::UpdatedAt, Expr::value(Utc::now()));

        let result = update.exec(db).await?;
        Ok(result.rows_affected)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
        let result = task::Entity::delete_many()
            .filter(task::Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}
