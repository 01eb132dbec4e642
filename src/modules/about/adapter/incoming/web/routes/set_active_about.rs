use actix_web::{patch, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::about::application::ports::incoming::use_cases::SetActiveAboutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Make a profile the active one. Every other profile is deactivated.
#[utoipa::path(
    patch,
    path = "/api/about/{about_id}/set-active",
    tag = "about",
    params(("about_id" = Uuid, Path, description = "About id")),
    responses(
        (status = 200, description = "Profile activated", body = inline(crate::api::schemas::SuccessResponse<crate::modules::about::application::domain::entities::About>)),
        (status = 404, description = "About not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[patch("/api/about/{about_id}/set-active")]
pub async fn set_active_about_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let about_id = path.into_inner();

    match data.about.set_active.execute(about_id).await {
        Ok(about) => ApiResponse::success(about),

        Err(SetActiveAboutError::NotFound) => {
            ApiResponse::not_found("ABOUT_NOT_FOUND", "About not found")
        }

        Err(SetActiveAboutError::RepositoryError(e)) => {
            error!("Failed to activate about {}: {}", about_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::about::application::ports::outgoing::{
        AboutListFilter, AboutQuery, AboutRepository,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::new_about;
    use crate::tests::support::in_memory::InMemoryAboutStore;

    #[actix_web::test]
    async fn test_set_active_leaves_exactly_one_active() {
        let store = InMemoryAboutStore::default();
        store.create_about(new_about("A", true)).await.unwrap();
        let b = store.create_about(new_about("B", false)).await.unwrap();
        store.create_about(new_about("C", false)).await.unwrap();

        let app_state = TestAppStateBuilder::default()
            .with_about_store(store.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(set_active_about_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/about/{}/set-active", b.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["active"], true);

        let all = store.list(AboutListFilter::default()).await.unwrap();
        let active: Vec<_> = all.iter().filter(|a| a.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, b.id);
    }

    #[actix_web::test]
    async fn test_set_active_unknown_profile_is_not_found() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(set_active_about_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/about/{}/set-active", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
