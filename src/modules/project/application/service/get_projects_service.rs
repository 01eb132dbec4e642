use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::{ProjectListFilter, ProjectQuery};
use crate::shared::pagination::{Listing, PageRequest};

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ProjectListFilter,
        page: Option<PageRequest>,
    ) -> Result<Listing<Project>, GetProjectsError> {
        let listing = match page {
            Some(page) => self.query.page(filter, page).await.map(Listing::Page),
            None => self.query.list(filter).await.map(Listing::All),
        };

        listing.map_err(|e| GetProjectsError::QueryError(e.to_string()))
    }
}
