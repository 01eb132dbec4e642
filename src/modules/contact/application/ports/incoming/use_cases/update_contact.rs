use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{Contact, ContactChanges};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateContactError {
    #[error("Invalid contact: {0}")]
    Invalid(ValidationErrors),

    #[error("Contact not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateContactUseCase: Send + Sync {
    async fn execute(
        &self,
        contact_id: Uuid,
        changes: ContactChanges,
    ) -> Result<Contact, UpdateContactError>;
}
