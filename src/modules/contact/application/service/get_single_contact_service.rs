use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::incoming::use_cases::{
    GetSingleContactError, GetSingleContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{ContactQuery, ContactQueryError};

pub struct GetSingleContactService<Q>
where
    Q: ContactQuery,
{
    query: Q,
}

impl<Q> GetSingleContactService<Q>
where
    Q: ContactQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleContactUseCase for GetSingleContactService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(&self, contact_id: Uuid) -> Result<Contact, GetSingleContactError> {
        self.query
            .get_by_id(contact_id)
            .await
            .map_err(|e| match e {
                ContactQueryError::NotFound => GetSingleContactError::NotFound,
                ContactQueryError::DatabaseError(msg) => GetSingleContactError::QueryError(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tests::support::mocks::MockContactQ;

    #[tokio::test]
    async fn test_missing_contact_is_not_found() {
        let mut query = MockContactQ::new();
        query
            .expect_get_by_id()
            .returning(|_| Err(ContactQueryError::NotFound));

        let service = GetSingleContactService::new(query);
        let err = service.execute(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, GetSingleContactError::NotFound));
    }
}
