use db::DBService;
use db::models::project::Project;
use db::models::task::{CreateTask, Task, UpdateTask};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TaskServiceError {
    #[error("Task <{0}> not found")]
    NotFound(Uuid),
    #[error("Project <{0}> not found")]
    ProjectNotFound(Uuid),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Persistence(String),
}

pub type Result<T> = std::result::Result<T, TaskServiceError>;

/// Task CRUD. Creation verifies the referenced project exists before the
/// insert so a missing project surfaces as a domain error instead of an
/// opaque foreign-key violation; the check and the insert are two
/// independent statements, not a transaction.
#[derive(Clone)]
pub struct TaskService {
    db: DBService,
}

impl TaskService {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: CreateTask) -> Result<Task> {
        if data.title.trim().is_empty() {
            return Err(TaskServiceError::Validation(
                "Task title must not be empty".to_string(),
            ));
        }

        let project_id = data.project_id;
        match Project::find_by_id(&self.db.conn, project_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::warn!("Project <{project_id}> not found");
                return Err(TaskServiceError::ProjectNotFound(project_id));
            }
            Err(err) => {
                tracing::error!("Error checking project <{project_id}>: {err}");
                return Err(TaskServiceError::Validation(
                    "Failed to create task".to_string(),
                ));
            }
        }

        let id = Uuid::new_v4();
        match Task::create(&self.db.conn, &data, id).await {
            Ok(task) => {
                tracing::info!("Created task <{}> in project <{project_id}>", task.id);
                Ok(task)
            }
            Err(err) => {
                tracing::error!("Error creating task: {err}");
                Err(TaskServiceError::Validation(
                    "Failed to create task".to_string(),
                ))
            }
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Task>> {
        match Task::find_all(&self.db.conn).await {
            Ok(tasks) => {
                tracing::debug!("Fetched {} tasks", tasks.len());
                Ok(tasks)
            }
            Err(err) => {
                tracing::error!("Error fetching tasks: {err}");
                Err(TaskServiceError::Persistence(
                    "Failed to fetch tasks".to_string(),
                ))
            }
        }
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Task> {
        match Task::find_by_id(&self.db.conn, id).await {
            Ok(Some(task)) => Ok(task),
            Ok(None) => {
                tracing::warn!("Task <{id}> not found");
                Err(TaskServiceError::NotFound(id))
            }
            Err(err) => {
                tracing::error!("Error finding task <{id}>: {err}");
                Err(TaskServiceError::Persistence(format!(
                    "Failed to find task <{id}>"
                )))
            }
        }
    }

    pub async fn update(&self, id: Uuid, payload: UpdateTask) -> Result<()> {
        if let Some(title) = &payload.title
            && title.trim().is_empty()
        {
            return Err(TaskServiceError::Validation(
                "Task title must not be empty".to_string(),
            ));
        }

        match Task::update(&self.db.conn, id, &payload).await {
            Ok(0) => {
                tracing::warn!("Task <{id}> not found for update");
                Err(TaskServiceError::NotFound(id))
            }
            Ok(_) => {
                tracing::info!("Updated task <{id}>");
                Ok(())
            }
            Err(err) => {
                tracing::error!("Error updating task <{id}>: {err}");
                Err(TaskServiceError::Validation(format!(
                    "Failed to update task <{id}>"
                )))
            }
        }
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        match Task::delete(&self.db.conn, id).await {
            Ok(0) => {
                tracing::warn!("Task <{id}> not found for deletion");
                Err(TaskServiceError::NotFound(id))
            }
            Ok(_) => {
                tracing::info!("Deleted task <{id}>");
                Ok(())
            }
            Err(err) => {
                tracing::error!("Error deleting task <{id}>: {err}");
                Err(TaskServiceError::Persistence(format!(
                    "Failed to delete task <{id}>"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use db::models::project::CreateProject;
    use db::types::TaskStatus;

    use super::*;

    async fn setup() -> (TaskService, Uuid) {
        let db = test_support::sqlite_db().await;
        let project = Project::create(
            &db.conn,
            &CreateProject {
                name: "host".to_string(),
                description: None,
            },
            Uuid::new_v4(),
        )
        .await
        .unwrap();
        (TaskService::new(db), project.id)
    }

    fn payload(project_id: Uuid, title: &str) -> CreateTask {
        CreateTask {
            project_id,
            title: title.to_string(),
            description: None,
            status: TaskStatus::Todo,
            due_date: None,
        }
    }

    #[tokio::test]
    async fn create_against_missing_project_yields_domain_error() {
        let (service, _) = setup().await;
        let missing = Uuid::new_v4();
        assert!(matches!(
            service.create(payload(missing, "t")).await,
            Err(TaskServiceError::ProjectNotFound(id)) if id == missing
        ));
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_empty_title() {
        let (service, project_id) = setup().await;
        assert!(matches!(
            service.create(payload(project_id, "  ")).await,
            Err(TaskServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn create_then_find_one_round_trips() {
        let (service, project_id) = setup().await;
        let created = service.create(payload(project_id, "write docs")).await.unwrap();
        assert_eq!(created.project_id, project_id);

        let found = service.find_one(created.id).await.unwrap();
        assert_eq!(found.title, "write docs");
        assert_eq!(found.status, TaskStatus::Todo);
    }

    #[tokio::test]
    async fn update_missing_yields_not_found_and_existing_patches() {
        let (service, project_id) = setup().await;
        assert!(matches!(
            service.update(Uuid::new_v4(), UpdateTask::default()).await,
            Err(TaskServiceError::NotFound(_))
        ));

        let created = service.create(payload(project_id, "t")).await.unwrap();
        service
            .update(
                created.id,
                UpdateTask {
                    status: Some(TaskStatus::InProgress),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(
            service.find_one(created.id).await.unwrap().status,
            TaskStatus::InProgress
        );
    }

    #[tokio::test]
    async fn update_to_missing_project_is_a_validation_failure() {
        let (service, project_id) = setup().await;
        let created = service.create(payload(project_id, "t")).await.unwrap();

        let result = service
            .update(
                created.id,
                UpdateTask {
                    project_id: Some(Uuid::new_v4()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(TaskServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn remove_is_durable() {
        let (service, project_id) = setup().await;
        let created = service.create(payload(project_id, "t")).await.unwrap();

        service.remove(created.id).await.unwrap();
        assert!(matches!(
            service.find_one(created.id).await,
            Err(TaskServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.remove(created.id).await,
            Err(TaskServiceError::NotFound(_))
        ));
    }
}
