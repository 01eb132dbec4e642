use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    Contact, ContactChanges, ContactStatus, NewContact,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    AdvanceContactStatusError, AdvanceContactStatusUseCase, CreateContactError,
    CreateContactUseCase, GetContactsError, GetContactsUseCase, UpdateContactError,
    UpdateContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactListFilter;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::shared::pagination::{Listing, PageRequest, PageResult};
use crate::tests::support::fixtures::sample_contact;

// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────

pub struct StubGetSingleProjectUseCase {
    result: Result<Project, GetSingleProjectError>,
}

impl StubGetSingleProjectUseCase {
    pub fn found(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleProjectError::NotFound),
        }
    }
}

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<Project, GetSingleProjectError> {
        self.result.clone()
    }
}

// ──────────────────────────────────────────────────────────
// Contacts
// ──────────────────────────────────────────────────────────

pub struct StubCreateContactUseCase {
    result: Result<Contact, CreateContactError>,
}

impl StubCreateContactUseCase {
    pub fn success(contact: Contact) -> Self {
        Self {
            result: Ok(contact),
        }
    }

    pub fn error(err: CreateContactError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl CreateContactUseCase for StubCreateContactUseCase {
    async fn execute(&self, _data: NewContact) -> Result<Contact, CreateContactError> {
        self.result.clone()
    }
}

/// Returns a fixed list and remembers the last filter and page it was asked for.
#[derive(Clone)]
pub struct RecordingGetContactsUseCase {
    contacts: Vec<Contact>,
    last_call: Arc<Mutex<Option<(ContactListFilter, Option<PageRequest>)>>>,
}

impl RecordingGetContactsUseCase {
    pub fn returning(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            last_call: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_call(&self) -> Option<(ContactListFilter, Option<PageRequest>)> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl GetContactsUseCase for RecordingGetContactsUseCase {
    async fn execute(
        &self,
        filter: ContactListFilter,
        page: Option<PageRequest>,
    ) -> Result<Listing<Contact>, GetContactsError> {
        *self.last_call.lock().unwrap() = Some((filter, page));

        Ok(match page {
            Some(page) => Listing::Page(PageResult {
                items: self.contacts.clone(),
                total: self.contacts.len() as u64,
                page: page.page,
                per_page: page.per_page,
            }),
            None => Listing::All(self.contacts.clone()),
        })
    }
}

pub struct StubUpdateContactUseCase {
    result: Result<Contact, UpdateContactError>,
}

impl StubUpdateContactUseCase {
    pub fn error(err: UpdateContactError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl UpdateContactUseCase for StubUpdateContactUseCase {
    async fn execute(
        &self,
        _contact_id: Uuid,
        _changes: ContactChanges,
    ) -> Result<Contact, UpdateContactError> {
        self.result.clone()
    }
}

/// Echoes a fresh contact with `contact_id` at the requested status.
pub struct StubAdvanceContactStatusUseCase;

#[async_trait]
impl AdvanceContactStatusUseCase for StubAdvanceContactStatusUseCase {
    async fn execute(
        &self,
        contact_id: Uuid,
        status: ContactStatus,
    ) -> Result<Contact, AdvanceContactStatusError> {
        let mut contact = sample_contact();
        contact.id = contact_id;
        contact.set_status(status);
        Ok(contact)
    }
}
