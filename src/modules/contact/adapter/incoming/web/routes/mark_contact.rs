use actix_web::{patch, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactStatus;
use crate::modules::contact::application::ports::incoming::use_cases::AdvanceContactStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn advance(data: &AppState, contact_id: Uuid, status: ContactStatus) -> HttpResponse {
    match data.contact.advance_status.execute(contact_id, status).await {
        Ok(contact) => ApiResponse::success(contact),

        Err(AdvanceContactStatusError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }

        Err(AdvanceContactStatusError::RepositoryError(e)) => {
            error!("Failed to mark contact {} as {:?}: {}", contact_id, status, e);
            ApiResponse::internal_error()
        }
    }
}

/// Mark a contact message as read
#[utoipa::path(
    patch,
    path = "/api/contact/{contact_id}/read",
    tag = "contact",
    params(("contact_id" = Uuid, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact marked as read", body = inline(crate::api::schemas::SuccessResponse<crate::modules::contact::application::domain::entities::Contact>)),
        (status = 404, description = "Contact not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[patch("/api/contact/{contact_id}/read")]
pub async fn mark_contact_read_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    advance(&data, path.into_inner(), ContactStatus::Read).await
}

/// Mark a contact message as replied (implies read)
#[utoipa::path(
    patch,
    path = "/api/contact/{contact_id}/replied",
    tag = "contact",
    params(("contact_id" = Uuid, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact marked as replied", body = inline(crate::api::schemas::SuccessResponse<crate::modules::contact::application::domain::entities::Contact>)),
        (status = 404, description = "Contact not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[patch("/api/contact/{contact_id}/replied")]
pub async fn mark_contact_replied_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    advance(&data, path.into_inner(), ContactStatus::Replied).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubAdvanceContactStatusUseCase;

    #[actix_web::test]
    async fn test_mark_read_then_replied() {
        let app_state = TestAppStateBuilder::default()
            .with_advance_contact_status(StubAdvanceContactStatusUseCase)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(mark_contact_read_handler)
                .service(mark_contact_replied_handler),
        )
        .await;

        let id = Uuid::new_v4();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/contact/{}/read", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["read"], true);
        assert_eq!(body["data"]["replied"], false);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/contact/{}/replied", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["read"], true);
        assert_eq!(body["data"]["replied"], true);
    }

    #[actix_web::test]
    async fn test_mark_unknown_contact_is_not_found() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(mark_contact_read_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/contact/{}/read", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
