use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::about::application::domain::entities::NewAbout;
use crate::modules::about::application::ports::incoming::use_cases::CreateAboutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create an about profile
///
/// Creating it with `active: true` deactivates the current profile.
#[utoipa::path(
    post,
    path = "/api/about",
    tag = "about",
    request_body = NewAbout,
    responses(
        (status = 201, description = "About created", body = inline(crate::api::schemas::SuccessResponse<crate::modules::about::application::domain::entities::About>)),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/about")]
pub async fn create_about_handler(
    req: web::Json<NewAbout>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.about.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateAboutError::Invalid(errors)) => {
            ApiResponse::validation_error(errors.into_messages())
        }

        Err(CreateAboutError::RepositoryError(e)) => {
            error!("Repository error creating about: {}", e);
            ApiResponse::internal_error()
        }
    }
}
