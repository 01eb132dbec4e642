// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    /// Case-insensitive match on title or description.
    pub search: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn get_by_id(&self, project_id: Uuid) -> Result<Project, ProjectQueryError>;

    /// Every matching project, newest first.
    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectQueryError>;

    async fn page(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Project>, ProjectQueryError>;
}
