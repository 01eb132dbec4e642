use anyhow::{bail, Context};

const DEFAULT_BACKEND_URL: &str = "http://localhost:3001/api";

/// Which surface this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRole {
    /// REST API backed by PostgreSQL.
    Api,
    /// Admin gateway forwarding to the REST API.
    Gateway,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub role: AppRole,
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Only present for the `api` role.
    pub database: Option<DatabaseConfig>,
    pub backend_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let role = match lookup("APP_ROLE").as_deref().map(str::trim) {
            None | Some("") | Some("api") => AppRole::Api,
            Some("gateway") => AppRole::Gateway,
            Some(other) => bail!("APP_ROLE must be `api` or `gateway`, got `{other}`"),
        };

        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let default_port = match role {
            AppRole::Api => "3001",
            AppRole::Gateway => "3000",
        };
        let port = lookup("PORT")
            .unwrap_or_else(|| default_port.to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let database = match role {
            AppRole::Api => {
                let url = lookup("DATABASE_URL").context("DATABASE_URL is not set")?;
                let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
                    .map(|v| v.parse::<u32>())
                    .transpose()
                    .context("DATABASE_MAX_CONNECTIONS must be a number")?
                    .unwrap_or(20);
                let run_migrations = lookup("RUN_MIGRATIONS")
                    .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
                    .unwrap_or(false);

                Some(DatabaseConfig {
                    url,
                    max_connections,
                    run_migrations,
                })
            }
            AppRole::Gateway => None,
        };

        let backend_url = lookup("BACKEND_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Ok(Self {
            role,
            environment,
            host,
            port,
            database,
            backend_url,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
