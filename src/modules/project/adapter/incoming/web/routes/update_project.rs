use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectChanges;
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Update a project
///
/// Merge update: fields left out of the body keep their stored value,
/// `null` clears an optional field.
#[utoipa::path(
    put,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = Uuid, Path, description = "Project id")),
    request_body = ProjectChanges,
    responses(
        (status = 200, description = "Project updated", body = inline(crate::api::schemas::SuccessResponse<crate::modules::project::application::domain::entities::Project>)),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Project not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[put("/api/projects/{project_id}")]
pub async fn update_project_handler(
    path: web::Path<Uuid>,
    req: web::Json<ProjectChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .project
        .update
        .execute(project_id, req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateProjectError::Invalid(errors)) => {
            ApiResponse::validation_error(errors.into_messages())
        }

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
