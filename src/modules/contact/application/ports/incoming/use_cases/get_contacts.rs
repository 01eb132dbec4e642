use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::outgoing::ContactListFilter;
use crate::shared::pagination::{Listing, PageRequest};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContactsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetContactsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ContactListFilter,
        page: Option<PageRequest>,
    ) -> Result<Listing<Contact>, GetContactsError>;
}
