use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::About;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleAboutError {
    #[error("About not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSingleAboutUseCase: Send + Sync {
    async fn execute(&self, about_id: Uuid) -> Result<About, GetSingleAboutError>;
}
