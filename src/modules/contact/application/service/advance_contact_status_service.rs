use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{Contact, ContactStatus};
use crate::modules::contact::application::ports::incoming::use_cases::{
    AdvanceContactStatusError, AdvanceContactStatusUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct AdvanceContactStatusService<R>
where
    R: ContactRepository,
{
    contact_repository: R,
}

impl<R> AdvanceContactStatusService<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repository: R) -> Self {
        Self { contact_repository }
    }
}

#[async_trait]
impl<R> AdvanceContactStatusUseCase for AdvanceContactStatusService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        contact_id: Uuid,
        status: ContactStatus,
    ) -> Result<Contact, AdvanceContactStatusError> {
        let contact = self
            .contact_repository
            .advance_status(contact_id, status)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => AdvanceContactStatusError::NotFound,
                ContactRepositoryError::DatabaseError(msg) => {
                    AdvanceContactStatusError::RepositoryError(msg)
                }
            })?;

        info!(%contact_id, status = ?contact.status(), "contact status advanced");
        Ok(contact)
    }
}
