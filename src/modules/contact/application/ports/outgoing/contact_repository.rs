use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    Contact, ContactChanges, ContactStatus, NewContact,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Contact not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(&self, data: NewContact) -> Result<Contact, ContactRepositoryError>;

    /// Applies field changes and raises the status to `changes.requested_status()`.
    async fn update_contact(
        &self,
        contact_id: Uuid,
        changes: ContactChanges,
    ) -> Result<Contact, ContactRepositoryError>;

    /// Moves the contact forward to `status`. A contact already past it is
    /// returned unchanged.
    async fn advance_status(
        &self,
        contact_id: Uuid,
        status: ContactStatus,
    ) -> Result<Contact, ContactRepositoryError>;

    async fn delete_contact(&self, contact_id: Uuid) -> Result<Contact, ContactRepositoryError>;
}
