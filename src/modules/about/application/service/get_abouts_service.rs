use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::About;
use crate::modules::about::application::ports::incoming::use_cases::{
    GetAboutsError, GetAboutsUseCase, GetActiveAboutError, GetActiveAboutUseCase,
    GetSingleAboutError, GetSingleAboutUseCase,
};
use crate::modules::about::application::ports::outgoing::{
    AboutListFilter, AboutQuery, AboutQueryError,
};
use crate::shared::pagination::{Listing, PageRequest};

// ──────────────────────────────────────────────────────────
// List
// ──────────────────────────────────────────────────────────

pub struct GetAboutsService<Q>
where
    Q: AboutQuery,
{
    query: Q,
}

impl<Q> GetAboutsService<Q>
where
    Q: AboutQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAboutsUseCase for GetAboutsService<Q>
where
    Q: AboutQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: AboutListFilter,
        page: Option<PageRequest>,
    ) -> Result<Listing<About>, GetAboutsError> {
        let listing = match page {
            Some(page) => self.query.page(filter, page).await.map(Listing::Page),
            None => self.query.list(filter).await.map(Listing::All),
        };

        listing.map_err(|e| GetAboutsError::QueryError(e.to_string()))
    }
}

// ──────────────────────────────────────────────────────────
// Single
// ──────────────────────────────────────────────────────────

pub struct GetSingleAboutService<Q>
where
    Q: AboutQuery,
{
    query: Q,
}

impl<Q> GetSingleAboutService<Q>
where
    Q: AboutQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleAboutUseCase for GetSingleAboutService<Q>
where
    Q: AboutQuery + Send + Sync,
{
    async fn execute(&self, about_id: Uuid) -> Result<About, GetSingleAboutError> {
        self.query.get_by_id(about_id).await.map_err(|e| match e {
            AboutQueryError::NotFound => GetSingleAboutError::NotFound,
            other => GetSingleAboutError::QueryError(other.to_string()),
        })
    }
}

// ──────────────────────────────────────────────────────────
// Active
// ──────────────────────────────────────────────────────────

pub struct GetActiveAboutService<Q>
where
    Q: AboutQuery,
{
    query: Q,
}

impl<Q> GetActiveAboutService<Q>
where
    Q: AboutQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetActiveAboutUseCase for GetActiveAboutService<Q>
where
    Q: AboutQuery + Send + Sync,
{
    async fn execute(&self) -> Result<About, GetActiveAboutError> {
        self.query.get_active().await.map_err(|e| match e {
            AboutQueryError::NotFound => GetActiveAboutError::NotFound,
            other => GetActiveAboutError::QueryError(other.to_string()),
        })
    }
}
