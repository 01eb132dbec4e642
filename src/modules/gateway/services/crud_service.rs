use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::gateway::client::{ClientError, CrudResource, ListQuery, Resource};
use crate::shared::pagination::PageResult;

/// What the route adapter needs from a domain service.
#[async_trait]
pub trait CrudService: Send + Sync + 'static {
    type Item: Serialize + Send + Sync;
    type Create: DeserializeOwned + Send + Sync;
    type Update: DeserializeOwned + Send + Sync;

    async fn find_all(&self) -> Vec<Self::Item>;

    async fn find_one(&self, id: Uuid) -> Option<Self::Item>;

    async fn create(&self, data: Self::Create) -> Result<Self::Item, ClientError>;

    async fn update(&self, id: Uuid, data: Self::Update) -> Result<Self::Item, ClientError>;

    async fn remove(&self, id: Uuid) -> Result<(), ClientError>;

    async fn get_list(&self, query: ListQuery) -> Result<PageResult<Self::Item>, ClientError>;
}

/// A service whose CRUD calls go straight to one [`CrudResource`].
pub trait ResourceBacked: Send + Sync + 'static {
    type Resource: Resource;

    fn resource(&self) -> &CrudResource<Self::Resource>;
}

#[async_trait]
impl<S> CrudService for S
where
    S: ResourceBacked,
{
    type Item = <S::Resource as Resource>::Item;
    type Create = <S::Resource as Resource>::Create;
    type Update = <S::Resource as Resource>::Update;

    async fn find_all(&self) -> Vec<Self::Item> {
        self.resource().find_all().await
    }

    async fn find_one(&self, id: Uuid) -> Option<Self::Item> {
        self.resource().find_one(id).await
    }

    async fn create(&self, data: Self::Create) -> Result<Self::Item, ClientError> {
        self.resource().create(&data).await
    }

    async fn update(&self, id: Uuid, data: Self::Update) -> Result<Self::Item, ClientError> {
        self.resource().update(id, &data).await
    }

    async fn remove(&self, id: Uuid) -> Result<(), ClientError> {
        self.resource().remove(id).await
    }

    async fn get_list(&self, query: ListQuery) -> Result<PageResult<Self::Item>, ClientError> {
        self.resource().get_list(&query).await
    }
}
