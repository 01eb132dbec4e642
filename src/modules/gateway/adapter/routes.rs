use actix_web::{http::StatusCode, web, HttpResponse, Scope};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use super::route_adapter::{failure, ApiRouteAdapter, FETCH_FAILED, ITEM_NOT_FOUND};
use crate::modules::gateway::client::{ClientError, HttpClient};
use crate::modules::gateway::services::{AboutService, ContactService, CrudService, ProjectService};

const ACTIVATE_FAILED: &str = "Falha ao ativar perfil";
const ID_REQUIRED: &str = "ID é obrigatório";
const STATUS_FAILED: &str = "Falha ao atualizar status";

/// The three domain services behind the gateway.
#[derive(Clone)]
pub struct GatewayServices {
    pub about: Arc<AboutService>,
    pub contact: Arc<ContactService>,
    pub project: Arc<ProjectService>,
}

impl GatewayServices {
    pub fn new(http: HttpClient) -> Self {
        Self {
            about: Arc::new(AboutService::new(http.clone())),
            contact: Arc::new(ContactService::new(http.clone())),
            project: Arc::new(ProjectService::new(http)),
        }
    }
}

pub fn init_gateway_routes(cfg: &mut web::ServiceConfig, services: GatewayServices) {
    let about = web::scope("/api/about")
        .app_data(web::Data::new(ApiRouteAdapter::new(services.about)))
        .route("/current", web::get().to(get_active_about))
        .route("/activate", web::put().to(activate_about))
        .route("/{id}/set-active", web::patch().to(set_active_about));

    let contact = web::scope("/api/contact")
        .app_data(web::Data::new(ApiRouteAdapter::new(services.contact)))
        .route("/unread", web::get().to(get_unread_contacts))
        .route("/{id}/read", web::patch().to(mark_contact_read))
        .route("/{id}/replied", web::patch().to(mark_contact_replied));

    let projects = web::scope("/api/projects")
        .app_data(web::Data::new(ApiRouteAdapter::new(services.project)));

    cfg.service(crud_routes::<AboutService>(about))
        .service(crud_routes::<ContactService>(contact))
        .service(crud_routes::<ProjectService>(projects));
}

/// Generic collection and item routes. Registered after the fixed paths
/// of `scope` so `{id}` never shadows them.
fn crud_routes<S: CrudService>(scope: Scope) -> Scope {
    scope
        .route("", web::get().to(get_all::<S>))
        .route("", web::post().to(create::<S>))
        .route("/{id}", web::get().to(get_by_id::<S>))
        .route("/{id}", web::put().to(update::<S>))
        .route("/{id}", web::delete().to(delete::<S>))
}

// ──────────────────────────────────────────────────────────
// Generic handlers
// ──────────────────────────────────────────────────────────

async fn get_all<S: CrudService>(
    adapter: web::Data<ApiRouteAdapter<S>>,
    query: web::Query<BTreeMap<String, String>>,
) -> HttpResponse {
    adapter.handle_get_all(&query).await
}

async fn get_by_id<S: CrudService>(
    adapter: web::Data<ApiRouteAdapter<S>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    adapter.handle_get_by_id(path.into_inner()).await
}

async fn create<S: CrudService>(
    adapter: web::Data<ApiRouteAdapter<S>>,
    body: web::Bytes,
) -> HttpResponse {
    adapter.handle_create(&body).await
}

async fn update<S: CrudService>(
    adapter: web::Data<ApiRouteAdapter<S>>,
    path: web::Path<Uuid>,
    body: web::Bytes,
) -> HttpResponse {
    adapter.handle_update(path.into_inner(), &body).await
}

async fn delete<S: CrudService>(
    adapter: web::Data<ApiRouteAdapter<S>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    adapter.handle_delete(path.into_inner()).await
}

// ──────────────────────────────────────────────────────────
// About
// ──────────────────────────────────────────────────────────

async fn get_active_about(adapter: web::Data<ApiRouteAdapter<AboutService>>) -> HttpResponse {
    match adapter.service().find_active().await {
        Some(about) => HttpResponse::Ok().json(about),
        None => failure(StatusCode::NOT_FOUND, "Nenhum perfil ativo"),
    }
}

#[derive(Debug, Deserialize)]
struct ActivateRequest {
    id: Option<Uuid>,
}

async fn activate_about(
    adapter: web::Data<ApiRouteAdapter<AboutService>>,
    body: web::Bytes,
) -> HttpResponse {
    let id = serde_json::from_slice::<ActivateRequest>(&body)
        .ok()
        .and_then(|req| req.id);

    match id {
        Some(id) => set_active(&adapter, id).await,
        None => failure(StatusCode::BAD_REQUEST, ID_REQUIRED),
    }
}

async fn set_active_about(
    adapter: web::Data<ApiRouteAdapter<AboutService>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    set_active(&adapter, path.into_inner()).await
}

async fn set_active(adapter: &ApiRouteAdapter<AboutService>, id: Uuid) -> HttpResponse {
    match adapter.service().set_active(id).await {
        Ok(about) => HttpResponse::Ok().json(about),
        Err(e) if e.is_not_found() => failure(StatusCode::NOT_FOUND, ITEM_NOT_FOUND),
        Err(e) => {
            error!(%id, error = %e, "activation failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, ACTIVATE_FAILED)
        }
    }
}

// ──────────────────────────────────────────────────────────
// Contact
// ──────────────────────────────────────────────────────────

async fn get_unread_contacts(
    adapter: web::Data<ApiRouteAdapter<ContactService>>,
) -> HttpResponse {
    match adapter.service().get_unread_contacts().await {
        Ok(contacts) => HttpResponse::Ok().json(contacts),
        Err(e) => {
            error!(error = %e, "unread listing failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED)
        }
    }
}

async fn mark_contact_read(
    adapter: web::Data<ApiRouteAdapter<ContactService>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();
    status_response(id, adapter.service().mark_as_read(id).await)
}

async fn mark_contact_replied(
    adapter: web::Data<ApiRouteAdapter<ContactService>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();
    status_response(id, adapter.service().mark_as_replied(id).await)
}

fn status_response<T: Serialize>(
    id: Uuid,
    result: Result<T, ClientError>,
) -> HttpResponse {
    match result {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(e) if e.is_not_found() => failure(StatusCode::NOT_FOUND, ITEM_NOT_FOUND),
        Err(e) => {
            error!(%id, error = %e, "status change failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, STATUS_FAILED)
        }
    }
}
