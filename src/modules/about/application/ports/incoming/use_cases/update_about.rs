use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::{About, AboutChanges};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateAboutError {
    #[error("Invalid about: {0}")]
    Invalid(ValidationErrors),

    #[error("About not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateAboutUseCase: Send + Sync {
    async fn execute(&self, about_id: Uuid, changes: AboutChanges)
        -> Result<About, UpdateAboutError>;
}
