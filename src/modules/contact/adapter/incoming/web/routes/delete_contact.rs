use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::DeleteContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/contact/{contact_id}",
    tag = "contact",
    params(("contact_id" = Uuid, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact removed", body = inline(crate::api::schemas::SuccessResponse<crate::modules::contact::application::domain::entities::Contact>)),
        (status = 404, description = "Contact not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[delete("/api/contact/{contact_id}")]
pub async fn delete_contact_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let contact_id = path.into_inner();

    match data.contact.delete.execute(contact_id).await {
        Ok(removed) => ApiResponse::success(removed),

        Err(DeleteContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }

        Err(DeleteContactError::RepositoryError(e)) => {
            error!("Repository error deleting contact {}: {}", contact_id, e);
            ApiResponse::internal_error()
        }
    }
}
