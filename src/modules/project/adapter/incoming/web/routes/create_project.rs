use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::project::application::domain::entities::NewProject;
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = NewProject,
    responses(
        (status = 201, description = "Project created", body = inline(crate::api::schemas::SuccessResponse<crate::modules::project::application::domain::entities::Project>)),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    req: web::Json<NewProject>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::Invalid(errors)) => {
            ApiResponse::validation_error(errors.into_messages())
        }

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
