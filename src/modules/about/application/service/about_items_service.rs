use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::About;
use crate::modules::about::application::domain::profile_items::{AboutItem, AboutSection};
use crate::modules::about::application::ports::incoming::use_cases::{
    AddAboutItemError, AddAboutItemUseCase, RemoveAboutItemError, RemoveAboutItemUseCase,
};
use crate::modules::about::application::ports::outgoing::{
    AboutRepository, AboutRepositoryError,
};

// ──────────────────────────────────────────────────────────
// Add
// ──────────────────────────────────────────────────────────

pub struct AddAboutItemService<R>
where
    R: AboutRepository,
{
    about_repository: R,
}

impl<R> AddAboutItemService<R>
where
    R: AboutRepository,
{
    pub fn new(about_repository: R) -> Self {
        Self { about_repository }
    }
}

#[async_trait]
impl<R> AddAboutItemUseCase for AddAboutItemService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(
        &self,
        about_id: Uuid,
        section: AboutSection,
        item: serde_json::Value,
    ) -> Result<About, AddAboutItemError> {
        let item = AboutItem::parse(section, item).map_err(AddAboutItemError::Invalid)?;
        let item_id = item.id();

        let about = self
            .about_repository
            .add_item(about_id, item)
            .await
            .map_err(|e| match e {
                AboutRepositoryError::NotFound => AddAboutItemError::NotFound,
                other => AddAboutItemError::RepositoryError(other.to_string()),
            })?;

        info!(%about_id, %section, %item_id, "about item added");
        Ok(about)
    }
}

// ──────────────────────────────────────────────────────────
// Remove
// ──────────────────────────────────────────────────────────

pub struct RemoveAboutItemService<R>
where
    R: AboutRepository,
{
    about_repository: R,
}

impl<R> RemoveAboutItemService<R>
where
    R: AboutRepository,
{
    pub fn new(about_repository: R) -> Self {
        Self { about_repository }
    }
}

#[async_trait]
impl<R> RemoveAboutItemUseCase for RemoveAboutItemService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(
        &self,
        about_id: Uuid,
        section: AboutSection,
        item_id: Uuid,
    ) -> Result<About, RemoveAboutItemError> {
        let about = self
            .about_repository
            .remove_item(about_id, section, item_id)
            .await
            .map_err(|e| match e {
                AboutRepositoryError::NotFound => RemoveAboutItemError::NotFound,
                AboutRepositoryError::ItemNotFound(section) => {
                    RemoveAboutItemError::ItemNotFound(section)
                }
                other => RemoveAboutItemError::RepositoryError(other.to_string()),
            })?;

        info!(%about_id, %section, %item_id, "about item removed");
        Ok(about)
    }
}
