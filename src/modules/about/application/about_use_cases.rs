use std::sync::Arc;

use crate::modules::about::application::ports::incoming::use_cases::{
    AddAboutItemUseCase, CreateAboutUseCase, DeleteAboutUseCase, GetAboutsUseCase,
    GetActiveAboutUseCase, GetSingleAboutUseCase, RemoveAboutItemUseCase, SetActiveAboutUseCase,
    UpdateAboutUseCase,
};
use crate::modules::about::application::ports::outgoing::{AboutQuery, AboutRepository};
use crate::modules::about::application::service::{
    AddAboutItemService, CreateAboutService, DeleteAboutService, GetAboutsService,
    GetActiveAboutService, GetSingleAboutService, RemoveAboutItemService, SetActiveAboutService,
    UpdateAboutService,
};

#[derive(Clone)]
pub struct AboutUseCases {
    pub create: Arc<dyn CreateAboutUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetAboutsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleAboutUseCase + Send + Sync>,
    pub get_active: Arc<dyn GetActiveAboutUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateAboutUseCase + Send + Sync>,
    pub set_active: Arc<dyn SetActiveAboutUseCase + Send + Sync>,
    pub add_item: Arc<dyn AddAboutItemUseCase + Send + Sync>,
    pub remove_item: Arc<dyn RemoveAboutItemUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAboutUseCase + Send + Sync>,
}

impl AboutUseCases {
    pub fn new<R, Q>(repository: R, query: Q) -> Self
    where
        R: AboutRepository + Clone + 'static,
        Q: AboutQuery + Clone + 'static,
    {
        Self {
            create: Arc::new(CreateAboutService::new(repository.clone())),
            get_list: Arc::new(GetAboutsService::new(query.clone())),
            get_single: Arc::new(GetSingleAboutService::new(query.clone())),
            get_active: Arc::new(GetActiveAboutService::new(query)),
            update: Arc::new(UpdateAboutService::new(repository.clone())),
            set_active: Arc::new(SetActiveAboutService::new(repository.clone())),
            add_item: Arc::new(AddAboutItemService::new(repository.clone())),
            remove_item: Arc::new(RemoveAboutItemService::new(repository.clone())),
            delete: Arc::new(DeleteAboutService::new(repository)),
        }
    }
}
