use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{Contact, ContactChanges};
use crate::modules::contact::application::ports::incoming::use_cases::{
    UpdateContactError, UpdateContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct UpdateContactService<R>
where
    R: ContactRepository,
{
    contact_repository: R,
}

impl<R> UpdateContactService<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repository: R) -> Self {
        Self { contact_repository }
    }
}

#[async_trait]
impl<R> UpdateContactUseCase for UpdateContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        contact_id: Uuid,
        changes: ContactChanges,
    ) -> Result<Contact, UpdateContactError> {
        let changes = changes.validated().map_err(UpdateContactError::Invalid)?;

        let contact = self
            .contact_repository
            .update_contact(contact_id, changes)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => UpdateContactError::NotFound,
                ContactRepositoryError::DatabaseError(msg) => {
                    UpdateContactError::RepositoryError(msg)
                }
            })?;

        info!(%contact_id, "contact updated");
        Ok(contact)
    }
}
