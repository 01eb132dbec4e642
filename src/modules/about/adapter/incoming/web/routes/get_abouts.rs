use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::about::application::ports::incoming::use_cases::{
    GetAboutsError, GetActiveAboutError,
};
use crate::modules::about::application::ports::outgoing::AboutListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::ListParams;
use crate::AppState;

/// List about profiles
///
/// Newest first. `page` or `perPage` switches to a page object.
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "about",
    params(
        ("page" = Option<u32>, Query, description = "Page number (1-based)"),
        ("perPage" = Option<u32>, Query, description = "Items per page (max 100)"),
        ("search" = Option<String>, Query, description = "Case-insensitive match on title or description"),
    ),
    responses(
        (status = 200, description = "About profiles"),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/about")]
pub async fn get_abouts_handler(
    query: web::Query<ListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = AboutListFilter {
        search: query.search(),
    };

    match data
        .about
        .get_list
        .execute(filter, query.page_request())
        .await
    {
        Ok(listing) => ApiResponse::success(listing),

        Err(GetAboutsError::QueryError(msg)) => {
            error!("Failed to list about profiles: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// The profile currently shown on the site
#[utoipa::path(
    get,
    path = "/api/about/current",
    tag = "about",
    responses(
        (status = 200, description = "Active profile", body = inline(crate::api::schemas::SuccessResponse<crate::modules::about::application::domain::entities::About>)),
        (status = 404, description = "No active profile", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/about/current")]
pub async fn get_active_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about.get_active.execute().await {
        Ok(about) => ApiResponse::success(about),

        Err(GetActiveAboutError::NotFound) => {
            ApiResponse::not_found("ABOUT_NOT_FOUND", "No active about profile")
        }

        Err(GetActiveAboutError::QueryError(msg)) => {
            error!("Failed to fetch active about profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
