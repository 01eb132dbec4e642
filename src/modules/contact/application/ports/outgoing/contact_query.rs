use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::Contact;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactListFilter {
    /// Case-insensitive match on name, email or subject.
    pub search: Option<String>,
    pub read: Option<bool>,
    pub replied: Option<bool>,
}

impl ContactListFilter {
    pub fn unread() -> Self {
        Self {
            read: Some(false),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactQueryError {
    #[error("Contact not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactQuery: Send + Sync {
    async fn get_by_id(&self, contact_id: Uuid) -> Result<Contact, ContactQueryError>;

    /// Newest first.
    async fn list(&self, filter: ContactListFilter) -> Result<Vec<Contact>, ContactQueryError>;

    async fn page(
        &self,
        filter: ContactListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Contact>, ContactQueryError>;
}
