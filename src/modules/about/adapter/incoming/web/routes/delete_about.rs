use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::about::application::ports::incoming::use_cases::DeleteAboutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an about profile. Returns the removed profile.
#[utoipa::path(
    delete,
    path = "/api/about/{about_id}",
    tag = "about",
    params(("about_id" = Uuid, Path, description = "About id")),
    responses(
        (status = 200, description = "About deleted", body = inline(crate::api::schemas::SuccessResponse<crate::modules::about::application::domain::entities::About>)),
        (status = 404, description = "About not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[delete("/api/about/{about_id}")]
pub async fn delete_about_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let about_id = path.into_inner();

    match data.about.delete.execute(about_id).await {
        Ok(removed) => ApiResponse::success(removed),

        Err(DeleteAboutError::NotFound) => {
            ApiResponse::not_found("ABOUT_NOT_FOUND", "About not found")
        }

        Err(DeleteAboutError::RepositoryError(e)) => {
            error!("Failed to delete about {}: {}", about_id, e);
            ApiResponse::internal_error()
        }
    }
}
