use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::GetSingleContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/contact/{contact_id}",
    tag = "contact",
    params(("contact_id" = Uuid, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact", body = inline(crate::api::schemas::SuccessResponse<crate::modules::contact::application::domain::entities::Contact>)),
        (status = 404, description = "Contact not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/contact/{contact_id}")]
pub async fn get_contact_by_id_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let contact_id = path.into_inner();

    match data.contact.get_single.execute(contact_id).await {
        Ok(contact) => ApiResponse::success(contact),

        Err(GetSingleContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }

        Err(GetSingleContactError::QueryError(e)) => {
            error!("Failed to fetch contact {}: {}", contact_id, e);
            ApiResponse::internal_error()
        }
    }
}
