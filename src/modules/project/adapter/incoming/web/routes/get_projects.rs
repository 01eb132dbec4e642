use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::ProjectListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::ListParams;
use crate::AppState;

/// List projects
///
/// Returns every project, newest first. Passing `page` or `perPage` switches
/// the response to a page object `{items, total, page, perPage}`.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(
        ("page" = Option<u32>, Query, description = "Page number (1-based)"),
        ("perPage" = Option<u32>, Query, description = "Items per page (max 100)"),
        ("search" = Option<String>, Query, description = "Case-insensitive match on title or description"),
    ),
    responses(
        (status = 200, description = "Projects"),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<ListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = ProjectListFilter {
        search: query.search(),
    };

    match data
        .project
        .get_list
        .execute(filter, query.page_request())
        .await
    {
        Ok(listing) => ApiResponse::success(listing),

        Err(GetProjectsError::QueryError(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    use crate::modules::project::application::domain::entities::Project;
    use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;
    use crate::shared::pagination::{Listing, PageRequest, PageResult};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_project;

    /* --------------------------------------------------
     * Mock GetProjects Use Case (records its input)
     * -------------------------------------------------- */

    #[derive(Clone, Default)]
    struct RecordingGetProjects {
        seen: Arc<Mutex<Option<(ProjectListFilter, Option<PageRequest>)>>>,
        fail: bool,
    }

    #[async_trait]
    impl GetProjectsUseCase for RecordingGetProjects {
        async fn execute(
            &self,
            filter: ProjectListFilter,
            page: Option<PageRequest>,
        ) -> Result<Listing<Project>, GetProjectsError> {
            *self.seen.lock().unwrap() = Some((filter, page));

            if self.fail {
                return Err(GetProjectsError::QueryError("db down".to_string()));
            }

            Ok(match page {
                Some(page) => Listing::Page(PageResult {
                    items: vec![sample_project()],
                    total: 11,
                    page: page.page,
                    per_page: page.per_page,
                }),
                None => Listing::All(vec![sample_project(), sample_project()]),
            })
        }
    }

    #[actix_web::test]
    async fn test_get_projects_returns_array_without_pagination() {
        let uc = RecordingGetProjects::default();
        let app_state = TestAppStateBuilder::default()
            .with_get_projects(uc.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_projects_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects?search=%20rust%20")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let (filter, page) = uc.seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.search.as_deref(), Some("rust"));
        assert!(page.is_none());
    }

    #[actix_web::test]
    async fn test_get_projects_returns_page_when_requested() {
        let uc = RecordingGetProjects::default();
        let app_state = TestAppStateBuilder::default()
            .with_get_projects(uc.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_projects_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects?page=2&perPage=5")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["total"], 11);
        assert_eq!(body["data"]["page"], 2);
        assert_eq!(body["data"]["perPage"], 5);
    }

    #[actix_web::test]
    async fn test_get_projects_query_error_internal_error() {
        let uc = RecordingGetProjects {
            fail: true,
            ..Default::default()
        };
        let app_state = TestAppStateBuilder::default().with_get_projects(uc).build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
