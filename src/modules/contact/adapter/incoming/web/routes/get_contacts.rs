use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::contact::application::ports::incoming::use_cases::GetContactsError;
use crate::modules::contact::application::ports::outgoing::ContactListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{normalized_search, page_request};
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub read: Option<bool>,
    pub replied: Option<bool>,
}

/// List contact messages, newest first
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    params(
        ("page" = Option<u32>, Query, description = "Page number (1-based)"),
        ("perPage" = Option<u32>, Query, description = "Items per page (max 100)"),
        ("search" = Option<String>, Query, description = "Case-insensitive match on name, email or subject"),
        ("read" = Option<bool>, Query, description = "Only read / unread messages"),
        ("replied" = Option<bool>, Query, description = "Only replied / unreplied messages"),
    ),
    responses((status = 200, description = "Contacts"))
)]
#[get("/api/contact")]
pub async fn get_contacts_handler(
    query: web::Query<ContactListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = query.into_inner();
    let filter = ContactListFilter {
        search: normalized_search(params.search.as_deref()),
        read: params.read,
        replied: params.replied,
    };

    match data
        .contact
        .get_list
        .execute(filter, page_request(params.page, params.per_page))
        .await
    {
        Ok(listing) => ApiResponse::success(listing),

        Err(GetContactsError::QueryError(msg)) => {
            error!("Failed to list contacts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Unread contact messages, newest first
#[utoipa::path(
    get,
    path = "/api/contact/unread",
    tag = "contact",
    responses((status = 200, description = "Unread contacts"))
)]
#[get("/api/contact/unread")]
pub async fn get_unread_contacts_handler(data: web::Data<AppState>) -> impl Responder {
    match data
        .contact
        .get_list
        .execute(ContactListFilter::unread(), None)
        .await
    {
        Ok(listing) => ApiResponse::success(listing),

        Err(GetContactsError::QueryError(msg)) => {
            error!("Failed to list unread contacts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
