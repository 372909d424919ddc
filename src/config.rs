use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentBackend {
    /// Postgres-backed store, loaded asynchronously at startup.
    Remote,
    /// Snapshot persisted to JSON files under `DATA_DIR`.
    Local,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub base_url: String,
    pub service_key: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: ContentBackend,
    pub database_url: Option<String>,
    pub data_dir: PathBuf,
    /// Uploads are disabled when absent.
    pub storage: Option<StorageConfig>,
    pub jwt: JwtConfig,
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let host = optional_var("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = optional_var("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let backend = match optional_var("CONTENT_BACKEND").as_deref() {
            None | Some("local") => ContentBackend::Local,
            Some("remote") => ContentBackend::Remote,
            Some(other) => bail!("CONTENT_BACKEND must be `remote` or `local`, got `{other}`"),
        };

        let database_url = optional_var("DATABASE_URL");
        if backend == ContentBackend::Remote && database_url.is_none() {
            bail!("DATABASE_URL is required when CONTENT_BACKEND=remote");
        }

        let storage = match (optional_var("STORAGE_URL"), optional_var("STORAGE_SERVICE_KEY")) {
            (Some(base_url), Some(service_key)) => Some(StorageConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                service_key,
            }),
            (None, None) => None,
            _ => bail!("STORAGE_URL and STORAGE_SERVICE_KEY must be set together"),
        };

        let secret = optional_var("JWT_SECRET").context("JWT_SECRET is not set")?;
        if secret.len() < JwtConfig::MIN_SECRET_LEN {
            bail!(
                "JWT_SECRET must be at least {} characters",
                JwtConfig::MIN_SECRET_LEN
            );
        }
        let audience = optional_var("JWT_AUDIENCE")
            .unwrap_or_else(|| JwtConfig::DEFAULT_AUDIENCE.to_string());

        Ok(Self {
            host,
            port,
            backend,
            database_url,
            data_dir: optional_var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),
            storage,
            jwt: JwtConfig::new(secret, audience),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `.env.{RUST_ENV}` first, then `.env`.
pub fn load_dotenv() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}
