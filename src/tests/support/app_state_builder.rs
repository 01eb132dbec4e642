use std::sync::Arc;

use actix_web::web;

use crate::modules::about::application::about_use_cases::AboutUseCases;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    AdvanceContactStatusUseCase, CreateContactUseCase, GetContactsUseCase, UpdateContactUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    UpdateProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::in_memory::{
    InMemoryAboutStore, InMemoryContactStore, InMemoryProjectStore,
};
use crate::AppState;

/// Builds an `AppState` over empty in-memory stores, so every lookup is a
/// miss until a test swaps in its own use case or store.
pub struct TestAppStateBuilder {
    about: AboutUseCases,
    contact: ContactUseCases,
    project: ProjectUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let about = InMemoryAboutStore::default();
        let contact = InMemoryContactStore::default();
        let project = InMemoryProjectStore::default();

        Self {
            about: AboutUseCases::new(about.clone(), about),
            contact: ContactUseCases::new(contact.clone(), contact),
            project: ProjectUseCases::new(project.clone(), project),
        }
    }
}

impl TestAppStateBuilder {
    // ── About ───────────────────────────────────────────────

    pub fn with_about_store(mut self, store: InMemoryAboutStore) -> Self {
        self.about = AboutUseCases::new(store.clone(), store);
        self
    }

    // ── Contact ─────────────────────────────────────────────

    pub fn with_contact_store(mut self, store: InMemoryContactStore) -> Self {
        self.contact = ContactUseCases::new(store.clone(), store);
        self
    }

    pub fn with_create_contact(
        mut self,
        uc: impl CreateContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.create = Arc::new(uc);
        self
    }

    pub fn with_get_contacts(
        mut self,
        uc: impl GetContactsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.get_list = Arc::new(uc);
        self
    }

    pub fn with_update_contact(
        mut self,
        uc: impl UpdateContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.update = Arc::new(uc);
        self
    }

    pub fn with_advance_contact_status(
        mut self,
        uc: impl AdvanceContactStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.advance_status = Arc::new(uc);
        self
    }

    // ── Project ─────────────────────────────────────────────

    pub fn with_project_store(mut self, store: InMemoryProjectStore) -> Self {
        self.project = ProjectUseCases::new(store.clone(), store);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            about: self.about,
            contact: self.contact,
            project: self.project,
        })
    }
}
