use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactChanges;
use crate::modules::contact::application::ports::incoming::use_cases::UpdateContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update a contact message
///
/// `read` / `replied` set to `true` advance the status; `false` never lowers it.
#[utoipa::path(
    put,
    path = "/api/contact/{contact_id}",
    tag = "contact",
    params(("contact_id" = Uuid, Path, description = "Contact id")),
    request_body = ContactChanges,
    responses(
        (status = 200, description = "Contact updated", body = inline(crate::api::schemas::SuccessResponse<crate::modules::contact::application::domain::entities::Contact>)),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Contact not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[put("/api/contact/{contact_id}")]
pub async fn update_contact_handler(
    path: web::Path<Uuid>,
    req: web::Json<ContactChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    let contact_id = path.into_inner();

    match data
        .contact
        .update
        .execute(contact_id, req.into_inner())
        .await
    {
        Ok(contact) => ApiResponse::success(contact),

        Err(UpdateContactError::Invalid(errors)) => {
            ApiResponse::validation_error(errors.into_messages())
        }

        Err(UpdateContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }

        Err(UpdateContactError::RepositoryError(e)) => {
            error!("Repository error updating contact {}: {}", contact_id, e);
            ApiResponse::internal_error()
        }
    }
}
