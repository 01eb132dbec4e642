// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{
    NewProject, Project, ProjectChanges,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError>;

    /// Merge update without pre-read by the use case.
    async fn update_project(
        &self,
        project_id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectRepositoryError>;

    /// Hard delete. Returns the removed document.
    async fn delete_project(&self, project_id: Uuid) -> Result<Project, ProjectRepositoryError>;
}
