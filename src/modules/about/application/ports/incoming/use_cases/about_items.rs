use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::About;
use crate::modules::about::application::domain::profile_items::AboutSection;
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Add item
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddAboutItemError {
    #[error("Invalid item: {0}")]
    Invalid(ValidationErrors),

    #[error("About not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddAboutItemUseCase: Send + Sync {
    /// `item` is the raw body, read as an entry of `section`.
    async fn execute(
        &self,
        about_id: Uuid,
        section: AboutSection,
        item: serde_json::Value,
    ) -> Result<About, AddAboutItemError>;
}

//
// ──────────────────────────────────────────────────────────
// Remove item
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveAboutItemError {
    #[error("About not found")]
    NotFound,

    #[error("Item not found in {0}")]
    ItemNotFound(AboutSection),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveAboutItemUseCase: Send + Sync {
    async fn execute(
        &self,
        about_id: Uuid,
        section: AboutSection,
        item_id: Uuid,
    ) -> Result<About, RemoveAboutItemError>;
}
