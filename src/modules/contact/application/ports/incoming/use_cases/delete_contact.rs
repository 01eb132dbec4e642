use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::Contact;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteContactError {
    #[error("Contact not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteContactUseCase: Send + Sync {
    async fn execute(&self, contact_id: Uuid) -> Result<Contact, DeleteContactError>;
}
