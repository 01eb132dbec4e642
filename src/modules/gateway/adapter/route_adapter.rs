use actix_web::{http::StatusCode, HttpResponse};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, warn};
use uuid::Uuid;

use crate::modules::gateway::client::{ClientError, ListQuery};
use crate::modules::gateway::services::CrudService;
use crate::shared::pagination::DEFAULT_PER_PAGE;

pub const FETCH_FAILED: &str = "Falha ao buscar dados";
pub const ITEM_NOT_FOUND: &str = "Item não encontrado";
pub const CREATE_FAILED: &str = "Falha ao criar item";
pub const UPDATE_FAILED: &str = "Falha ao atualizar item";
pub const DELETE_FAILED: &str = "Falha ao excluir item";

/// Turns gateway HTTP calls into service calls and service results back
/// into plain JSON responses (no envelope).
pub struct ApiRouteAdapter<S: CrudService> {
    service: Arc<S>,
}

impl<S: CrudService> Clone for ApiRouteAdapter<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: CrudService> ApiRouteAdapter<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Pages only when `page` or `perPage` is given.
    pub async fn handle_get_all(&self, params: &BTreeMap<String, String>) -> HttpResponse {
        if !(params.contains_key("page") || params.contains_key("perPage")) {
            return HttpResponse::Ok().json(self.service.find_all().await);
        }

        match self.service.get_list(list_query(params)).await {
            Ok(page) => HttpResponse::Ok().json(page),
            Err(e) => {
                error!(error = %e, "paged listing failed");
                failure(StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED)
            }
        }
    }

    pub async fn handle_get_by_id(&self, id: Uuid) -> HttpResponse {
        match self.service.find_one(id).await {
            Some(item) => HttpResponse::Ok().json(item),
            None => failure(StatusCode::NOT_FOUND, ITEM_NOT_FOUND),
        }
    }

    pub async fn handle_create(&self, body: &[u8]) -> HttpResponse {
        let data: S::Create = match serde_json::from_slice(body) {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "create body rejected");
                return create_failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    CREATE_FAILED,
                    json!({}),
                );
            }
        };

        match self.service.create(data).await {
            Ok(created) => HttpResponse::Created().json(created),
            Err(e) => {
                error!(error = %e, upstream = ?e.upstream_body(), "create failed");
                upstream_create_failure(&e)
            }
        }
    }

    pub async fn handle_update(&self, id: Uuid, body: &[u8]) -> HttpResponse {
        let data: S::Update = match serde_json::from_slice(body) {
            Ok(data) => data,
            Err(e) => {
                warn!(%id, error = %e, "update body rejected");
                return failure(StatusCode::INTERNAL_SERVER_ERROR, UPDATE_FAILED);
            }
        };

        match self.service.update(id, data).await {
            Ok(updated) => HttpResponse::Ok().json(updated),
            Err(e) => {
                error!(%id, error = %e, "update failed");
                failure(StatusCode::INTERNAL_SERVER_ERROR, UPDATE_FAILED)
            }
        }
    }

    pub async fn handle_delete(&self, id: Uuid) -> HttpResponse {
        match self.service.remove(id).await {
            Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
            Err(e) => {
                error!(%id, error = %e, "delete failed");
                failure(StatusCode::INTERNAL_SERVER_ERROR, DELETE_FAILED)
            }
        }
    }
}

fn list_query(params: &BTreeMap<String, String>) -> ListQuery {
    let number = |key: &str, default: u32| {
        params
            .get(key)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(default)
    };

    ListQuery {
        page: number("page", 1),
        per_page: number("perPage", DEFAULT_PER_PAGE),
        search: params
            .get("search")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        extra: params
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "page" | "perPage" | "search"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    }
}

/// `{"error": message}`
pub fn failure(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "error": message }))
}

fn create_failure(status: StatusCode, message: &str, details: Value) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "error": message,
        "details": details,
        "status": status.as_u16(),
    }))
}

/// Mirrors the backend's status and message when there was a response.
fn upstream_create_failure(e: &ClientError) -> HttpResponse {
    let status = e
        .status()
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = e.upstream_message().unwrap_or(CREATE_FAILED);
    let details = e.upstream_body().cloned().unwrap_or_else(|| json!({}));

    create_failure(status, message, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;

    #[test]
    fn list_query_defaults_and_forwards_extras() {
        let params = btreemap! {
            "perPage".to_string() => "5".to_string(),
            "search".to_string() => "  ".to_string(),
            "read".to_string() => "false".to_string(),
        };

        let query = list_query(&params);

        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 5);
        assert_eq!(query.search, None);
        assert_eq!(
            query.extra,
            btreemap! { "read".to_string() => "false".to_string() }
        );
    }

    #[test]
    fn unparseable_numbers_fall_back_to_defaults() {
        let params = btreemap! { "page".to_string() => "abc".to_string() };

        let query = list_query(&params);

        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, DEFAULT_PER_PAGE);
    }

    #[actix_web::test]
    async fn upstream_validation_error_is_mirrored() {
        let err = ClientError::Status {
            status: 400,
            body: json!({ "statusCode": 400, "message": "Validation failed", "code": "VALIDATION_ERROR" }),
        };

        let resp = upstream_create_failure(&err);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["status"], 400);
        assert_eq!(body["details"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn transport_failure_is_internal_error_with_empty_details() {
        let err = ClientError::Transport("connection refused".to_string());

        let resp = upstream_create_failure(&err);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], CREATE_FAILED);
        assert_eq!(body["details"], json!({}));
        assert_eq!(body["status"], 500);
    }
}
