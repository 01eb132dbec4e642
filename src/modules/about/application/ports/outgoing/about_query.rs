use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::About;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutListFilter {
    /// Case-insensitive match on title or description.
    pub search: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutQueryError {
    #[error("About not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait AboutQuery: Send + Sync {
    async fn get_by_id(&self, about_id: Uuid) -> Result<About, AboutQueryError>;

    /// `NotFound` when no profile is active.
    async fn get_active(&self) -> Result<About, AboutQueryError>;

    /// Newest first.
    async fn list(&self, filter: AboutListFilter) -> Result<Vec<About>, AboutQueryError>;

    async fn page(
        &self,
        filter: AboutListFilter,
        page: PageRequest,
    ) -> Result<PageResult<About>, AboutQueryError>;
}
