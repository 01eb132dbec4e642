use async_trait::async_trait;

use crate::modules::about::application::domain::entities::{About, NewAbout};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateAboutError {
    #[error("Invalid about: {0}")]
    Invalid(ValidationErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateAboutUseCase: Send + Sync {
    async fn execute(&self, data: NewAbout) -> Result<About, CreateAboutError>;
}
