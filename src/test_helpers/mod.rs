use actix_web::{web, HttpResponse, Result};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement, TransactionTrait};
use serde::Serialize;
use std::sync::Arc;

/// Tables wiped by `/test-helpers/cleanup`, in deletion order.
const CONTENT_TABLES: [&str; 3] = ["abouts", "contacts", "projects"];

#[derive(Serialize)]
pub struct CleanupResponse {
    deleted_abouts: u64,
    deleted_contacts: u64,
    deleted_projects: u64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

/// POST /test-helpers/cleanup
pub async fn cleanup_content(db: web::Data<Arc<DatabaseConnection>>) -> Result<HttpResponse> {
    let txn = db.as_ref().begin().await.map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Transaction error: {}", e))
    })?;

    let mut deleted = [0u64; CONTENT_TABLES.len()];

    for (count, table) in deleted.iter_mut().zip(CONTENT_TABLES) {
        let result = txn
            .execute(Statement::from_string(
                sea_orm::DatabaseBackend::Postgres,
                format!("DELETE FROM {table}"),
            ))
            .await;

        match result {
            Ok(res) => *count = res.rows_affected(),
            Err(e) => {
                txn.rollback().await.ok();
                return Err(actix_web::error::ErrorInternalServerError(format!(
                    "Failed to clean {table}: {e}"
                )));
            }
        }
    }

    txn.commit()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Commit failed: {}", e)))?;

    let [deleted_abouts, deleted_contacts, deleted_projects] = deleted;

    Ok(HttpResponse::Ok().json(CleanupResponse {
        deleted_abouts,
        deleted_contacts,
        deleted_projects,
    }))
}

/// GET /test-helpers/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        tracing::error!("Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test-helpers")
            .route("/health", web::get().to(health_check))
            .route("/cleanup", web::post().to(cleanup_content)),
    );
}
