use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::AboutChanges;
use crate::modules::about::application::ports::incoming::use_cases::UpdateAboutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update an about profile
///
/// Merge semantics. Collections sent in the body replace the stored ones.
#[utoipa::path(
    put,
    path = "/api/about/{about_id}",
    tag = "about",
    params(("about_id" = Uuid, Path, description = "About id")),
    request_body = AboutChanges,
    responses(
        (status = 200, description = "About updated", body = inline(crate::api::schemas::SuccessResponse<crate::modules::about::application::domain::entities::About>)),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "About not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[put("/api/about/{about_id}")]
pub async fn update_about_handler(
    path: web::Path<Uuid>,
    req: web::Json<AboutChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    let about_id = path.into_inner();

    match data.about.update.execute(about_id, req.into_inner()).await {
        Ok(about) => ApiResponse::success(about),

        Err(UpdateAboutError::Invalid(errors)) => {
            ApiResponse::validation_error(errors.into_messages())
        }

        Err(UpdateAboutError::NotFound) => {
            ApiResponse::not_found("ABOUT_NOT_FOUND", "About not found")
        }

        Err(UpdateAboutError::RepositoryError(e)) => {
            error!("Repository error updating about {}: {}", about_id, e);
            ApiResponse::internal_error()
        }
    }
}
