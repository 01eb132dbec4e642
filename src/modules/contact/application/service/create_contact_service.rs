use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::entities::{Contact, NewContact};
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactError, CreateContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct CreateContactService<R>
where
    R: ContactRepository,
{
    contact_repository: R,
}

impl<R> CreateContactService<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repository: R) -> Self {
        Self { contact_repository }
    }
}

#[async_trait]
impl<R> CreateContactUseCase for CreateContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, data: NewContact) -> Result<Contact, CreateContactError> {
        let data = data.validated().map_err(CreateContactError::Invalid)?;

        let contact = self
            .contact_repository
            .create_contact(data)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::DatabaseError(msg) => {
                    CreateContactError::RepositoryError(msg)
                }
                ContactRepositoryError::NotFound => CreateContactError::RepositoryError(
                    "unexpected not found while creating contact".to_string(),
                ),
            })?;

        info!(contact_id = %contact.id, "contact message received");
        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tests::support::fixtures::{new_contact, sample_contact};
    use crate::tests::support::mocks::MockContactRepo;

    #[tokio::test]
    async fn test_execute_stores_trimmed_form() {
        let mut repo = MockContactRepo::new();
        repo.expect_create_contact()
            .withf(|data| data.name == "Ana" && data.email == "ana@example.com")
            .times(1)
            .returning(|_| Ok(sample_contact()));

        let service = CreateContactService::new(repo);

        let mut data = new_contact();
        data.name = "  Ana ".to_string();

        let contact = service.execute(data).await.unwrap();
        assert!(!contact.read);
        assert!(!contact.replied);
    }

    #[tokio::test]
    async fn test_execute_invalid_email_never_reaches_repository() {
        let mut repo = MockContactRepo::new();
        repo.expect_create_contact().never();

        let service = CreateContactService::new(repo);

        let mut data = new_contact();
        data.email = "ana-at-example".to_string();

        let err = service.execute(data).await.unwrap_err();
        assert!(matches!(err, CreateContactError::Invalid(e)
            if e.messages() == ["email must be a valid email address".to_string()]));
    }

    #[tokio::test]
    async fn test_execute_maps_database_error() {
        let mut repo = MockContactRepo::new();
        repo.expect_create_contact()
            .returning(|_| Err(ContactRepositoryError::DatabaseError("db down".to_string())));

        let service = CreateContactService::new(repo);

        let err = service.execute(new_contact()).await.unwrap_err();
        assert!(matches!(err, CreateContactError::RepositoryError(msg) if msg == "db down"));
    }
}
