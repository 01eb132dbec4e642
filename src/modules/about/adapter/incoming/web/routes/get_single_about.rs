use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::about::application::ports::incoming::use_cases::GetSingleAboutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/about/{about_id}",
    tag = "about",
    params(("about_id" = Uuid, Path, description = "About id")),
    responses(
        (status = 200, description = "About profile", body = inline(crate::api::schemas::SuccessResponse<crate::modules::about::application::domain::entities::About>)),
        (status = 404, description = "About not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/about/{about_id}")]
pub async fn get_about_by_id_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let about_id = path.into_inner();

    match data.about.get_single.execute(about_id).await {
        Ok(about) => ApiResponse::success(about),

        Err(GetSingleAboutError::NotFound) => {
            ApiResponse::not_found("ABOUT_NOT_FOUND", "About not found")
        }

        Err(GetSingleAboutError::QueryError(e)) => {
            error!("Failed to fetch about {}: {}", about_id, e);
            ApiResponse::internal_error()
        }
    }
}
