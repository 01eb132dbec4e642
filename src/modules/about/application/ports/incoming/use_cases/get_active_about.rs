use async_trait::async_trait;

use crate::modules::about::application::domain::entities::About;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetActiveAboutError {
    #[error("No active about")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetActiveAboutUseCase: Send + Sync {
    async fn execute(&self) -> Result<About, GetActiveAboutError>;
}
