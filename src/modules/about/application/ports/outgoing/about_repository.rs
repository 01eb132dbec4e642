use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::{About, AboutChanges, NewAbout};
use crate::modules::about::application::domain::profile_items::{AboutItem, AboutSection};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutRepositoryError {
    #[error("About not found")]
    NotFound,

    #[error("Item not found in {0}")]
    ItemNotFound(AboutSection),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Write-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// An active profile replaces the current active one.
    async fn create_about(&self, data: NewAbout) -> Result<About, AboutRepositoryError>;

    async fn update_about(
        &self,
        about_id: Uuid,
        changes: AboutChanges,
    ) -> Result<About, AboutRepositoryError>;

    /// Makes `about_id` the only active profile.
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
