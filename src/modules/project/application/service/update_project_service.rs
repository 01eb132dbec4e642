use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectChanges};
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, UpdateProjectError> {
        let changes = changes.validated().map_err(UpdateProjectError::Invalid)?;

        let project = self
            .project_repository
            .update_project(project_id, changes)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    UpdateProjectError::RepositoryError(msg)
                }
            })?;

        info!(%project_id, "project updated");
        Ok(project)
    }
}
