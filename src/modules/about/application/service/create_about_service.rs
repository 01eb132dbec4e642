use async_trait::async_trait;
use tracing::info;

use crate::modules::about::application::domain::entities::{About, NewAbout};
use crate::modules::about::application::ports::incoming::use_cases::{
    CreateAboutError, CreateAboutUseCase,
};
use crate::modules::about::application::ports::outgoing::{
    AboutRepository, AboutRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateAboutService<R>
where
    R: AboutRepository,
{
    about_repository: R,
}

impl<R> CreateAboutService<R>
where
    R: AboutRepository,
{
    pub fn new(about_repository: R) -> Self {
        Self { about_repository }
    }
}

#[async_trait]
impl<R> CreateAboutUseCase for CreateAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self, data: NewAbout) -> Result<About, CreateAboutError> {
        let data = data.validated().map_err(CreateAboutError::Invalid)?;

        let about = self
            .about_repository
            .create_about(data)
            .await
            .map_err(|e| match e {
                AboutRepositoryError::DatabaseError(msg)
                | AboutRepositoryError::SerializationError(msg) => {
                    CreateAboutError::RepositoryError(msg)
                }
                other => CreateAboutError::RepositoryError(other.to_string()),
            })?;

        info!(about_id = %about.id, active = about.active, "about created");
        Ok(about)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::tests::support::fixtures::sample_about;
    use crate::tests::support::mocks::MockAboutRepo;

    #[tokio::test]
    async fn test_execute_passes_cleaned_profile() {
        let mut repo = MockAboutRepo::new();
        repo.expect_create_about()
            .withf(|data| data.social_links.is_none() && data.title == "Hi")
            .times(1)
            .returning(|_| Ok(sample_about()));

        let service = CreateAboutService::new(repo);
        let data: NewAbout = serde_json::from_value(json!({
            "title": " Hi ",
            "description": "Backend developer",
            "socialLinks": { "github": "" }
        }))
        .unwrap();

        assert!(service.execute(data).await.is_ok());
    }

    #[tokio::test]
    async fn test_execute_rejects_blank_title() {
        let mut repo = MockAboutRepo::new();
        repo.expect_create_about().never();

        let service = CreateAboutService::new(repo);
        let data: NewAbout =
            serde_json::from_value(json!({ "title": "", "description": "x" })).unwrap();

        let err = service.execute(data).await.unwrap_err();
        assert!(matches!(err, CreateAboutError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_execute_maps_database_error() {
        let mut repo = MockAboutRepo::new();
        repo.expect_create_about()
            .returning(|_| Err(AboutRepositoryError::DatabaseError("db down".to_string())));

        let service = CreateAboutService::new(repo);
        let data: NewAbout =
            serde_json::from_value(json!({ "title": "Hi", "description": "x" })).unwrap();

        let err = service.execute(data).await.unwrap_err();
        assert!(matches!(err, CreateAboutError::RepositoryError(msg) if msg == "db down"));
    }
}
