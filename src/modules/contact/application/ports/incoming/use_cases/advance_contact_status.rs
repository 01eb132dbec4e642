use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{Contact, ContactStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdvanceContactStatusError {
    #[error("Contact not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Marks a contact read or replied.
#[async_trait]
pub trait AdvanceContactStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        contact_id: Uuid,
        status: ContactStatus,
    ) -> Result<Contact, AdvanceContactStatusError>;
}
