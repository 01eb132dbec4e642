use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a project by id
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = inline(crate::api::schemas::SuccessResponse<crate::modules::project::application::domain::entities::Project>)),
        (status = 404, description = "Project not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/projects/{project_id}")]
pub async fn get_project_by_id_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_single.execute(project_id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::QueryError(e)) => {
            error!("Failed to fetch project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_project;
    use crate::tests::support::stubs::StubGetSingleProjectUseCase;

    #[actix_web::test]
    async fn test_get_project_found() {
        let project = sample_project();
        let app_state = TestAppStateBuilder::default()
            .with_get_single_project(StubGetSingleProjectUseCase::found(project.clone()))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_project_by_id_handler))
                .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/projects/{}", project.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], project.id.to_string());
    }

    #[actix_web::test]
    async fn test_get_project_not_found() {
        let app_state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_project_by_id_handler))
                .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/projects/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["code"], "PROJECT_NOT_FOUND");
    }
}
