use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
///
/// Hard delete. Responds with the removed project.
#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project removed", body = inline(crate::api::schemas::SuccessResponse<crate::modules::project::application::domain::entities::Project>)),
        (status = 404, description = "Project not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[delete("/api/projects/{project_id}")]
pub async fn delete_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.delete.execute(project_id).await {
        Ok(removed) => ApiResponse::success(removed),

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
