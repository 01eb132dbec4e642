use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::About;
use crate::modules::about::application::ports::incoming::use_cases::{
    DeleteAboutError, DeleteAboutUseCase,
};
use crate::modules::about::application::ports::outgoing::{
    AboutRepository, AboutRepositoryError,
};

pub struct DeleteAboutService<R>
where
    R: AboutRepository,
{
    about_repository: R,
}

impl<R> DeleteAboutService<R>
where
    R: AboutRepository,
{
    pub fn new(about_repository: R) -> Self {
        Self { about_repository }
    }
}

#[async_trait]
impl<R> DeleteAboutUseCase for DeleteAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self, about_id: Uuid) -> Result<About, DeleteAboutError> {
        let removed = self
            .about_repository
            .delete_about(about_id)
            .await
            .map_err(|e| match e {
                AboutRepositoryError::NotFound => DeleteAboutError::NotFound,
                other => DeleteAboutError::RepositoryError(other.to_string()),
            })?;

        info!(%about_id, was_active = removed.active, "about deleted");
        Ok(removed)
    }
}
