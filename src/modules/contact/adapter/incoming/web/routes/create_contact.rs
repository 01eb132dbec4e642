use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::contact::application::domain::entities::NewContact;
use crate::modules::contact::application::ports::incoming::use_cases::CreateContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Submit a contact message
///
/// New messages are stored unread and not replied.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = NewContact,
    responses(
        (status = 201, description = "Message stored", body = inline(crate::api::schemas::SuccessResponse<crate::modules::contact::application::domain::entities::Contact>)),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn create_contact_handler(
    req: web::Json<NewContact>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.create.execute(req.into_inner()).await {
        Ok(contact) => ApiResponse::created(contact),

        Err(CreateContactError::Invalid(errors)) => {
            ApiResponse::validation_error(errors.into_messages())
        }

        Err(CreateContactError::RepositoryError(e)) => {
            error!("Repository error creating contact: {}", e);
            ApiResponse::internal_error()
        }
    }
}
