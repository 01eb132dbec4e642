use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    AdvanceContactStatusUseCase, CreateContactUseCase, DeleteContactUseCase, GetContactsUseCase,
    GetSingleContactUseCase, UpdateContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{ContactQuery, ContactRepository};
use crate::modules::contact::application::service::{
    AdvanceContactStatusService, CreateContactService, DeleteContactService, GetContactsService,
    GetSingleContactService, UpdateContactService,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub create: Arc<dyn CreateContactUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetContactsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleContactUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateContactUseCase + Send + Sync>,
    pub advance_status: Arc<dyn AdvanceContactStatusUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteContactUseCase + Send + Sync>,
}

impl ContactUseCases {
    pub fn new<R, Q>(repository: R, query: Q) -> Self
    where
        R: ContactRepository + Clone + 'static,
        Q: ContactQuery + Clone + 'static,
    {
        Self {
            create: Arc::new(CreateContactService::new(repository.clone())),
            get_list: Arc::new(GetContactsService::new(query.clone())),
            get_single: Arc::new(GetSingleContactService::new(query)),
            update: Arc::new(UpdateContactService::new(repository.clone())),
            advance_status: Arc::new(AdvanceContactStatusService::new(repository.clone())),
            delete: Arc::new(DeleteContactService::new(repository)),
        }
    }
}
