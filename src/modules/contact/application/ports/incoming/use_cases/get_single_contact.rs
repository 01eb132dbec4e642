use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::Contact;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleContactError {
    #[error("Contact not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSingleContactUseCase: Send + Sync {
    async fn execute(&self, contact_id: Uuid) -> Result<Contact, GetSingleContactError>;
}
