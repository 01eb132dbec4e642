use serde_json::Value;
use std::marker::PhantomData;
use tracing::warn;
use uuid::Uuid;

use super::envelope::{decode, decode_optional, unwrap_envelope};
use super::error::ClientError;
use super::http_client::HttpClient;
use super::resource::{ListQuery, Resource};
use crate::shared::pagination::PageResult;

/// CRUD calls against `{base_url}/{endpoint}` for one resource.
///
/// Reads absorb failures (empty list, `None`), writes propagate them.
pub struct CrudResource<R: Resource> {
    http: HttpClient,
    endpoint: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for CrudResource<R> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            endpoint: self.endpoint.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> CrudResource<R> {
    pub fn new(http: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into().trim_matches('/').to_string(),
            _resource: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// `{endpoint}/{suffix}`
    pub fn path(&self, suffix: &str) -> String {
        format!("{}/{}", self.endpoint, suffix.trim_start_matches('/'))
    }

    pub async fn find_all(&self) -> Vec<R::Item> {
        let body = match self.http.get(&self.endpoint, &[]).await {
            Ok(body) => unwrap_envelope(body),
            Err(e) => {
                warn!(endpoint = %self.endpoint, error = %e, "listing failed, returning empty list");
                return Vec::new();
            }
        };

        if body.is_null() {
            return Vec::new();
        }

        serde_json::from_value(body).unwrap_or_else(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "listing could not be decoded");
            Vec::new()
        })
    }

    pub async fn find_one(&self, id: Uuid) -> Option<R::Item> {
        match self.http.get(&self.path(&id.to_string()), &[]).await {
            Ok(body) => decode_optional(body, &self.endpoint),
            Err(e) if e.is_not_found() => None,
            Err(e) => {
                warn!(endpoint = %self.endpoint, %id, error = %e, "fetch failed");
                None
            }
        }
    }

    pub async fn create(&self, data: &R::Create) -> Result<R::Item, ClientError> {
        let body = self.http.post(&self.endpoint, data).await?;
        decode(body)
    }

    pub async fn update(&self, id: Uuid, data: &R::Update) -> Result<R::Item, ClientError> {
        let body = self.http.put(&self.path(&id.to_string()), data).await?;
        decode(body)
    }

    /// Deleting something already gone counts as success.
    pub async fn remove(&self, id: Uuid) -> Result<(), ClientError> {
        match self.http.delete(&self.path(&id.to_string())).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(e),
        }
    }

    pub async fn get_list(&self, query: &ListQuery) -> Result<PageResult<R::Item>, ClientError> {
        let body = self.http.get(&self.endpoint, &query.to_pairs()).await?;

        match unwrap_envelope(body) {
            // Backends without paging answer with the whole collection
            Value::Array(items) => {
                let items: Vec<R::Item> = decode(Value::Array(items))?;
                Ok(PageResult {
                    total: items.len() as u64,
                    page: query.page,
                    per_page: query.per_page,
                    items,
                })
            }
            page => decode(page),
        }
    }
}
