use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{Contact, NewContact};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateContactError {
    #[error("Invalid contact: {0}")]
    Invalid(ValidationErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateContactUseCase: Send + Sync {
    async fn execute(&self, data: NewContact) -> Result<Contact, CreateContactError>;
}
