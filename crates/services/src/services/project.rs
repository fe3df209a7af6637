use db::DBService;
use db::models::project::{CreateProject, Project, UpdateProject};
use db::models::task::Task;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProjectServiceError {
    #[error("Project <{0}> not found")]
    NotFound(Uuid),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Persistence(String),
}

pub type Result<T> = std::result::Result<T, ProjectServiceError>;

/// Project CRUD plus the tasks-of-project query. Raw storage errors are
/// re-classified here: writes surface as validation failures, reads and
/// deletes as persistence failures, and not-found passes through untouched.
#[derive(Clone)]
pub struct ProjectService {
    db: DBService,
}

impl ProjectService {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: CreateProject) -> Result<Project> {
        if data.name.trim().is_empty() {
            return Err(ProjectServiceError::Validation(
                "Project name must not be empty".to_string(),
            ));
        }

        let id = Uuid::new_v4();
        match Project::create(&self.db.conn, &data, id).await {
            Ok(project) => {
                tracing::info!("Created project <{}>", project.id);
                Ok(project)
            }
            Err(err) => {
                tracing::error!("Error creating project: {err}");
                Err(ProjectServiceError::Validation(
                    "Failed to create project".to_string(),
                ))
            }
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Project>> {
        match Project::find_all(&self.db.conn).await {
            Ok(projects) => {
                tracing::debug!("Fetched {} projects", projects.len());
                Ok(projects)
            }
            Err(err) => {
                tracing::error!("Error fetching projects: {err}");
                Err(ProjectServiceError::Persistence(
                    "Failed to fetch projects".to_string(),
                ))
            }
        }
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Project> {
        match Project::find_by_id(&self.db.conn, id).await {
            Ok(Some(project)) => Ok(project),
            Ok(None) => {
                tracing::warn!("Project <{id}> not found");
                Err(ProjectServiceError::NotFound(id))
            }
            Err(err) => {
                tracing::error!("Error finding project <{id}>: {err}");
                Err(ProjectServiceError::Persistence(format!(
                    "Failed to find project <{id}>"
                )))
            }
        }
    }

    /// Tasks belonging to the project; the empty set is a valid result.
    pub async fn find_tasks(&self, id: Uuid) -> Result<Vec<Task>> {
        self.find_one(id).await?;

        match Task::find_by_project_id(&self.db.conn, id).await {
            Ok(tasks) => {
                tracing::debug!("Fetched {} tasks for project <{id}>", tasks.len());
                Ok(tasks)
            }
            Err(err) => {
                tracing::error!("Error fetching tasks for project <{id}>: {err}");
                Err(ProjectServiceError::Persistence(format!(
                    "Failed to fetch tasks for project <{id}>"
                )))
            }
        }
    }

    pub async fn update(&self, id: Uuid, payload: UpdateProject) -> Result<()> {
        if let Some(name) = &payload.name
            && name.trim().is_empty()
        {
            return Err(ProjectServiceError::Validation(
                "Project name must not be empty".to_string(),
            ));
        }

        match Project::update(&self.db.conn, id, &payload).await {
            Ok(0) => {
                tracing::warn!("Project <{id}> not found for update");
                Err(ProjectServiceError::NotFound(id))
            }
            Ok(_) => {
                tracing::info!("Updated project <{id}>");
                Ok(())
            }
            Err(err) => {
                tracing::error!("Error updating project <{id}>: {err}");
                Err(ProjectServiceError::Validation(format!(
                    "Failed to update project <{id}>"
                )))
            }
        }
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        match Project::delete(&self.db.conn, id).await {
            Ok(0) => {
                tracing::warn!("Project <{id}> not found for deletion");
                Err(ProjectServiceError::NotFound(id))
            }
            Ok(_) => {
                tracing::info!("Deleted project <{id}>");
                Ok(())
            }
            Err(err) => {
                tracing::error!("Error deleting project <{id}>: {err}");
                Err(ProjectServiceError::Persistence(format!(
                    "Failed to delete project <{id}>"
                )))
            }
        }
    }
}
