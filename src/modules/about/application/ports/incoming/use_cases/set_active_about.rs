use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::About;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetActiveAboutError {
    #[error("About not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SetActiveAboutUseCase: Send + Sync {
    async fn execute(&self, about_id: Uuid) -> Result<About, SetActiveAboutError>;
}
