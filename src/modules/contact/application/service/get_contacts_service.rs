use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::incoming::use_cases::{
    GetContactsError, GetContactsUseCase,
};
use crate::modules::contact::application::ports::outgoing::{ContactListFilter, ContactQuery};
use crate::shared::pagination::{Listing, PageRequest};

pub struct GetContactsService<Q>
where
    Q: ContactQuery,
{
    query: Q,
}

impl<Q> GetContactsService<Q>
where
    Q: ContactQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetContactsUseCase for GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ContactListFilter,
        page: Option<PageRequest>,
    ) -> Result<Listing<Contact>, GetContactsError> {
        let listing = match page {
            Some(page) => self.query.page(filter, page).await.map(Listing::Page),
            None => self.query.list(filter).await.map(Listing::All),
        };

        listing.map_err(|e| GetContactsError::QueryError(e.to_string()))
    }
}
