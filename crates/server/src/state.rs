use db::DBService;
use services::services::{project::ProjectService, task::TaskService};

/// Shared handler state; services are wired up once at startup with their
/// store dependencies passed in explicitly.
#[derive(Clone)]
pub struct AppState {
    project_service: ProjectService,
    task_service: TaskService,
}

impl AppState {
    pub fn new(db: DBService) -> Self {
        Self {
            project_service: ProjectService::new(db.clone()),
            task_service: TaskService::new(db),
        }
    }

    pub fn project(&self) -> &ProjectService {
        &self.project_service
    }

    pub fn task(&self) -> &TaskService {
        &self.task_service
    }
}
