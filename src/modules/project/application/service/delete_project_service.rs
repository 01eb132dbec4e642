use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<Project, DeleteProjectError> {
        let removed = self
            .project_repository
            .delete_project(project_id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
                other => DeleteProjectError::RepositoryError(other.to_string()),
            })?;

        info!(%project_id, "project deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::project::application::domain::entities::{NewProject, ProjectChanges};
    use crate::tests::support::fixtures::sample_project;

    struct MockProjectRepo {
        result: Result<Project, ProjectRepositoryError>,
    }

    #[async_trait]
    impl ProjectRepository for MockProjectRepo {
        async fn create_project(&self, _data: NewProject) -> Result<Project, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn update_project(
            &self,
            _project_id: Uuid,
            _changes: ProjectChanges,
        ) -> Result<Project, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn delete_project(&self, _project_id: Uuid) -> Result<Project, ProjectRepositoryError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_execute_returns_removed_project() {
        let project = sample_project();
        let service = DeleteProjectService::new(MockProjectRepo {
            result: Ok(project.clone()),
        });

        assert_eq!(service.execute(project.id).await.unwrap().id, project.id);
    }

    #[tokio::test]
    async fn test_execute_maps_not_found() {
        let service = DeleteProjectService::new(MockProjectRepo {
            result: Err(ProjectRepositoryError::NotFound),
        });

        let res = service.execute(Uuid::new_v4()).await;

        assert!(matches!(res, Err(DeleteProjectError::NotFound)));
    }

    #[tokio::test]
    async fn test_execute_maps_database_error() {
        let service = DeleteProjectService::new(MockProjectRepo {
            result: Err(ProjectRepositoryError::DatabaseError("down".into())),
        });

        let res = service.execute(Uuid::new_v4()).await;

        assert!(matches!(res, Err(DeleteProjectError::RepositoryError(_))));
    }
}
