use actix_web::{delete, put, web, Responder};
use serde_json::Value;
use tracing::error;
use uuid::Uuid;

use crate::modules::about::application::domain::profile_items::AboutSection;
use crate::modules::about::application::ports::incoming::use_cases::{
    AddAboutItemError, RemoveAboutItemError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Add an entry to a profile section
///
/// The body is the entry itself. An entry carrying the id of an existing
/// one replaces it.
#[utoipa::path(
    put,
    path = "/api/about/{about_id}/{section}/add",
    tag = "about",
    params(
        ("about_id" = Uuid, Path, description = "About id"),
        ("section" = AboutSection, Path, description = "skills, education or experience"),
    ),
    responses(
        (status = 200, description = "Updated profile", body = inline(crate::api::schemas::SuccessResponse<crate::modules::about::application::domain::entities::About>)),
        (status = 400, description = "Invalid entry", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "About not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[put("/api/about/{about_id}/{section}/add")]
pub async fn add_about_item_handler(
    path: web::Path<(Uuid, AboutSection)>,
    req: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (about_id, section) = path.into_inner();

    match data
        .about
        .add_item
        .execute(about_id, section, req.into_inner())
        .await
    {
        Ok(about) => ApiResponse::success(about),

        Err(AddAboutItemError::Invalid(errors)) => {
            ApiResponse::validation_error(errors.into_messages())
        }

        Err(AddAboutItemError::NotFound) => {
            ApiResponse::not_found("ABOUT_NOT_FOUND", "About not found")
        }

        Err(AddAboutItemError::RepositoryError(e)) => {
            error!("Failed to add {} entry to about {}: {}", section, about_id, e);
            ApiResponse::internal_error()
        }
    }
}

/// Remove an entry from a profile section
#[utoipa::path(
    delete,
    path = "/api/about/{about_id}/{section}/{item_id}",
    tag = "about",
    params(
        ("about_id" = Uuid, Path, description = "About id"),
        ("section" = AboutSection, Path, description = "skills, education or experience"),
        ("item_id" = Uuid, Path, description = "Entry id"),
    ),
    responses(
        (status = 200, description = "Updated profile", body = inline(crate::api::schemas::SuccessResponse<crate::modules::about::application::domain::entities::About>)),
        (status = 404, description = "About or entry not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[delete("/api/about/{about_id}/{section}/{item_id}")]
pub async fn remove_about_item_handler(
    path: web::Path<(Uuid, AboutSection, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (about_id, section, item_id) = path.into_inner();

    match data
        .about
        .remove_item
        .execute(about_id, section, item_id)
        .await
    {
        Ok(about) => ApiResponse::success(about),

        Err(RemoveAboutItemError::NotFound) => {
            ApiResponse::not_found("ABOUT_NOT_FOUND", "About not found")
        }

        Err(RemoveAboutItemError::ItemNotFound(section)) => ApiResponse::not_found(
            "ITEM_NOT_FOUND",
            &format!("No {} entry with this id", section),
        ),

        Err(RemoveAboutItemError::RepositoryError(e)) => {
            error!(
                "Failed to remove {} entry {} from about {}: {}",
                section, item_id, about_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
