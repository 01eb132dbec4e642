pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::api::openapi::ApiDoc;
use crate::modules::about::adapter::outgoing::{AboutQueryPostgres, AboutRepositoryPostgres};
use crate::modules::about::application::about_use_cases::AboutUseCases;
use crate::modules::contact::adapter::outgoing::{ContactQueryPostgres, ContactRepositoryPostgres};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::gateway::adapter::routes::{init_gateway_routes, GatewayServices};
use crate::modules::gateway::client::HttpClient;
use crate::modules::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::config::{AppConfig, AppRole, DatabaseConfig};

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub about: AboutUseCases,
    pub contact: ContactUseCases,
    pub project: ProjectUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;

    #[cfg(feature = "test-helpers")]
    {
        if config.is_production() {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        tracing::warn!(
            "Test helper routes are ENABLED for environment: {}",
            config.environment
        );
    }

    info!(
        "Starting {:?} on {} ({})",
        config.role,
        config.server_url(),
        config.environment
    );

    match config.role {
        AppRole::Api => {
            let database = config
                .database
                .clone()
                .context("database settings missing for the api role")?;
            serve_api(&config, database).await
        }
        AppRole::Gateway => serve_gateway(&config).await,
    }
}

#[cfg(not(tarpaulin_include))]
async fn serve_api(config: &AppConfig, database: DatabaseConfig) -> anyhow::Result<()> {
    let mut opt = ConnectOptions::new(database.url);
    opt.max_connections(database.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if database.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);

    let state = AppState {
        about: AboutUseCases::new(
            AboutRepositoryPostgres::new(Arc::clone(&db_arc)),
            AboutQueryPostgres::new(Arc::clone(&db_arc)),
        ),
        contact: ContactUseCases::new(
            ContactRepositoryPostgres::new(Arc::clone(&db_arc)),
            ContactQueryPostgres::new(Arc::clone(&db_arc)),
        ),
        project: ProjectUseCases::new(
            ProjectRepositoryPostgres::new(Arc::clone(&db_arc)),
            ProjectQueryPostgres::new(Arc::clone(&db_arc)),
        ),
    };

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        #[allow(unused_mut)]
        let mut app = App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(config.server_url())?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn serve_gateway(config: &AppConfig) -> anyhow::Result<()> {
    info!("Forwarding to {}", config.backend_url);

    let services = GatewayServices::new(HttpClient::new(config.backend_url.clone()));

    HttpServer::new(move || {
        let services = services.clone();
        App::new()
            .wrap(Logger::default())
            .service(crate::health::health)
            .configure(move |cfg| init_gateway_routes(cfg, services))
    })
    .bind(config.server_url())?
    .run()
    .await?;

    Ok(())
}

/// Fixed paths (`current`, `unread`) go before the `{id}` routes they share
/// a prefix with.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::about::adapter::incoming::web::routes as about;
    use crate::modules::contact::adapter::incoming::web::routes as contact;
    use crate::modules::project::adapter::incoming::web::routes as project;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // About
    cfg.service(about::get_abouts_handler);
    cfg.service(about::get_active_about_handler);
    cfg.service(about::get_about_by_id_handler);
    cfg.service(about::create_about_handler);
    cfg.service(about::update_about_handler);
    cfg.service(about::set_active_about_handler);
    cfg.service(about::add_about_item_handler);
    cfg.service(about::remove_about_item_handler);
    cfg.service(about::delete_about_handler);
    // Contact
    cfg.service(contact::get_contacts_handler);
    cfg.service(contact::get_unread_contacts_handler);
    cfg.service(contact::get_contact_by_id_handler);
    cfg.service(contact::create_contact_handler);
    cfg.service(contact::update_contact_handler);
    cfg.service(contact::mark_contact_read_handler);
    cfg.service(contact::mark_contact_replied_handler);
    cfg.service(contact::delete_contact_handler);
    // Projects
    cfg.service(project::get_projects_handler);
    cfg.service(project::get_project_by_id_handler);
    cfg.service(project::create_project_handler);
    cfg.service(project::update_project_handler);
    cfg.service(project::delete_project_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
