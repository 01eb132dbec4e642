use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::{About, AboutChanges};
use crate::modules::about::application::ports::incoming::use_cases::{
    UpdateAboutError, UpdateAboutUseCase,
};
use crate::modules::about::application::ports::outgoing::{
    AboutRepository, AboutRepositoryError,
};

pub struct UpdateAboutService<R>
where
    R: AboutRepository,
{
    about_repository: R,
}

impl<R> UpdateAboutService<R>
where
    R: AboutRepository,
{
    pub fn new(about_repository: R) -> Self {
        Self { about_repository }
    }
}

#[async_trait]
impl<R> UpdateAboutUseCase for UpdateAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(
        &self,
        about_id: Uuid,
        changes: AboutChanges,
    ) -> Result<About, UpdateAboutError> {
        let changes = changes.validated().map_err(UpdateAboutError::Invalid)?;

        let about = self
            .about_repository
            .update_about(about_id, changes)
            .await
            .map_err(|e| match e {
                AboutRepositoryError::NotFound => UpdateAboutError::NotFound,
                other => UpdateAboutError::RepositoryError(other.to_string()),
            })?;

        info!(%about_id, "about updated");
        Ok(about)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::about::application::domain::profile_items::Tenure;
    use crate::tests::support::fixtures::sample_about;
    use crate::tests::support::mocks::MockAboutRepo;

    #[tokio::test]
    async fn test_current_experience_reaches_repository_without_end_date() {
        let mut repo = MockAboutRepo::new();
        repo.expect_update_about()
            .withf(|_, changes| {
                changes
                    .experience
                    .as_ref()
                    .is_some_and(|items| items[0].tenure == Tenure::Ongoing)
            })
            .times(1)
            .returning(|_, _| Ok(sample_about()));

        let service = UpdateAboutService::new(repo);
        let changes: AboutChanges = serde_json::from_value(json!({
            "experience": [{
                "company": "Acme",
                "position": "Engineer",
                "startDate": "2022-01-01",
                "current": true,
                "endDate": "2024-01-01"
            }]
        }))
        .unwrap();

        assert!(service.execute(Uuid::new_v4(), changes).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let mut repo = MockAboutRepo::new();
        repo.expect_update_about()
            .returning(|_, _| Err(AboutRepositoryError::NotFound));

        let service = UpdateAboutService::new(repo);
        let err = service
            .execute(Uuid::new_v4(), AboutChanges::default())
            .await
            .unwrap_err();

        assert!(matches!(err, UpdateAboutError::NotFound));
    }
}
