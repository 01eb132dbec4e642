use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::About;
use crate::modules::about::application::ports::incoming::use_cases::{
    SetActiveAboutError, SetActiveAboutUseCase,
};
use crate::modules::about::application::ports::outgoing::{
    AboutRepository, AboutRepositoryError,
};

pub struct SetActiveAboutService<R>
where
    R: AboutRepository,
{
    about_repository: R,
}

impl<R> SetActiveAboutService<R>
where
    R: AboutRepository,
{
    pub fn new(about_repository: R) -> Self {
        Self { about_repository }
    }
}

#[async_trait]
impl<R> SetActiveAboutUseCase for SetActiveAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self, about_id: Uuid) -> Result<About, SetActiveAboutError> {
        let about = self
            .about_repository
            .set_active(about_id)
            .await
            .map_err(|e| match e {
                AboutRepositoryError::NotFound => SetActiveAboutError::NotFound,
                other => SetActiveAboutError::RepositoryError(other.to_string()),
            })?;

        info!(%about_id, "about activated");
        Ok(about)
    }
}
