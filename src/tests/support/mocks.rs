//! `mockall` doubles for the outgoing ports used by the service tests.

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::{About, AboutChanges, NewAbout};
use crate::modules::about::application::domain::profile_items::{AboutItem, AboutSection};
use crate::modules::about::application::ports::outgoing::{
    AboutListFilter, AboutQuery, AboutQueryError, AboutRepository, AboutRepositoryError,
};
use crate::modules::contact::application::domain::entities::{
    Contact, ContactChanges, ContactStatus, NewContact,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactListFilter, ContactQuery, ContactQueryError, ContactRepository, ContactRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

mock! {
    pub ContactRepo {}
    #[async_trait]
    impl ContactRepository for ContactRepo {
        async fn create_contact(&self, data: NewContact) -> Result<Contact, ContactRepositoryError>;

        async fn update_contact(
            &self,
            contact_id: Uuid,
            changes: ContactChanges,
        ) -> Result<Contact, ContactRepositoryError>;

        async fn advance_status(
            &self,
            contact_id: Uuid,
            status: ContactStatus,
        ) -> Result<Contact, ContactRepositoryError>;

        async fn delete_contact(&self, contact_id: Uuid) -> Result<Contact, ContactRepositoryError>;
    }
}

mock! {
    pub ContactQ {}
    #[async_trait]
    impl ContactQuery for ContactQ {
        async fn get_by_id(&self, contact_id: Uuid) -> Result<Contact, ContactQueryError>;

        async fn list(&self, filter: ContactListFilter) -> Result<Vec<Contact>, ContactQueryError>;

        async fn page(
            &self,
            filter: ContactListFilter,
            page: PageRequest,
        ) -> Result<PageResult<Contact>, ContactQueryError>;
    }
}

mock! {
    pub AboutRepo {}
    #[async_trait]
    impl AboutRepository for AboutRepo {
        async fn create_about(&self, data: NewAbout) -> Result<About, AboutRepositoryError>;

        async fn update_about(
            &self,
            about_id: Uuid,
            changes: AboutChanges,
        ) -> Result<About, AboutRepositoryError>;

        async fn set_active(&self, about_id: Uuid) -> Result<About, AboutRepositoryError>;

        async fn add_item(&self, about_id: Uuid, item: AboutItem)
            -> Result<About, AboutRepositoryError>;

        async fn remove_item(
            &self,
            about_id: Uuid,
            section: AboutSection,
            item_id: Uuid,
        ) -> Result<About, AboutRepositoryError>;

        async fn delete_about(&self, about_id: Uuid) -> Result<About, AboutRepositoryError>;
    }
}

mock! {
    pub AboutQ {}
    #[async_trait]
    impl AboutQuery for AboutQ {
        async fn get_by_id(&self, about_id: Uuid) -> Result<About, AboutQueryError>;

        async fn get_active(&self) -> Result<About, AboutQueryError>;

        async fn list(&self, filter: AboutListFilter) -> Result<Vec<About>, AboutQueryError>;

        async fn page(
            &self,
            filter: AboutListFilter,
            page: PageRequest,
        ) -> Result<PageResult<About>, AboutQueryError>;
    }
}
