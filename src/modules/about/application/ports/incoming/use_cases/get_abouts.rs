use async_trait::async_trait;

use crate::modules::about::application::domain::entities::About;
use crate::modules::about::application::ports::outgoing::AboutListFilter;
use crate::shared::pagination::{Listing, PageRequest};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAboutsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetAboutsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: AboutListFilter,
        page: Option<PageRequest>,
    ) -> Result<Listing<About>, GetAboutsError>;
}
