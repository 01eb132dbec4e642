use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::ProjectListFilter;
use crate::shared::pagination::{Listing, PageRequest};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    /// `page = None` returns the whole collection.
    async fn execute(
        &self,
        filter: ProjectListFilter,
        page: Option<PageRequest>,
    ) -> Result<Listing<Project>, GetProjectsError>;
}
