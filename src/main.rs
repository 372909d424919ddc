pub mod api;
mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, contact, content, multimedia};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::application::ports::outgoing::token_verifier::TokenVerifier;
use crate::config::{AppConfig, ContentBackend, StorageConfig};
use crate::contact::adapter::outgoing::{
    ContactMessageRepositoryKv, ContactMessageRepositoryPostgres,
};
use crate::contact::application::ContactUseCases;
use crate::content::adapter::outgoing::{
    ExperienceRepositoryPostgres, FileKeyValueStore, MediaRepositoryPostgres,
    ProjectRepositoryPostgres, ReviewRepositoryPostgres, SettingsRepositoryPostgres,
};
use crate::content::application::ports::incoming::ContentStore;
use crate::content::application::ports::outgoing::ContentRepositories;
use crate::content::application::service::{LocalContentStore, RemoteContentStore};
use crate::multimedia::adapter::outgoing::HttpBlobStorage;
use crate::multimedia::application::domain::policies::UploadPolicy;
use crate::multimedia::application::ports::incoming::services::{
    DeleteMediaFileService, UploadMediaService,
};
use crate::multimedia::application::MultimediaUseCases;
use crate::shared::api::{custom_json_config, upload_payload_config};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    /// `None` when no blob storage is configured.
    pub multimedia: Option<MultimediaUseCases>,
    pub upload_policy: UploadPolicy,
    pub contact: ContactUseCases,
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(url: &str) -> anyhow::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(url.to_string());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Ok(Arc::new(conn))
}

fn postgres_repositories(db: &Arc<DatabaseConnection>) -> ContentRepositories {
    ContentRepositories {
        projects: Arc::new(ProjectRepositoryPostgres::new(Arc::clone(db))),
        experience: Arc::new(ExperienceRepositoryPostgres::new(Arc::clone(db))),
        reviews: Arc::new(ReviewRepositoryPostgres::new(Arc::clone(db))),
        media: Arc::new(MediaRepositoryPostgres::new(Arc::clone(db))),
        settings: Arc::new(SettingsRepositoryPostgres::new(Arc::clone(db))),
    }
}

fn multimedia_use_cases(
    storage: &StorageConfig,
    policy: &UploadPolicy,
) -> anyhow::Result<MultimediaUseCases> {
    let blob_storage = HttpBlobStorage::new(
        storage.base_url.clone(),
        storage.service_key.clone(),
        policy.cache_control_seconds,
    )
    .context("Failed to build storage client")?;

    Ok(MultimediaUseCases {
        upload: Arc::new(UploadMediaService::new(blob_storage.clone(), policy.clone())),
        delete_file: Arc::new(DeleteMediaFileService::new(blob_storage)),
    })
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

    info!("Starting application...");

    config::load_dotenv();
    let config = AppConfig::from_env()?;

    let db = match config.database_url.as_deref() {
        Some(url) => Some(connect_database(url).await?),
        None => None,
    };

    // Content store
    let content: Arc<dyn ContentStore> = match (config.backend, &db) {
        (ContentBackend::Remote, Some(db)) => {
            let store = Arc::new(RemoteContentStore::new(postgres_repositories(db)));
            let loader = Arc::clone(&store);
            tokio::spawn(async move { loader.load().await });
            store
        }
        (ContentBackend::Remote, None) => {
            anyhow::bail!("DATABASE_URL is required when CONTENT_BACKEND=remote")
        }
        (ContentBackend::Local, _) => {
            info!("Using local content store in {}", config.data_dir.display());
            Arc::new(LocalContentStore::open(FileKeyValueStore::new(&config.data_dir)).await)
        }
    };

    // Contact inbox
    let contact = match &db {
        Some(db) => ContactUseCases::from_repository(ContactMessageRepositoryPostgres::new(
            Arc::clone(db),
        )),
        None => ContactUseCases::from_repository(ContactMessageRepositoryKv::new(
            FileKeyValueStore::new(&config.data_dir),
        )),
    };

    // Uploads
    let upload_policy = UploadPolicy::default();
    let multimedia = match &config.storage {
        Some(storage) => Some(multimedia_use_cases(storage, &upload_policy)?),
        None => {
            warn!("STORAGE_URL not set, uploads are disabled");
            None
        }
    };

    let state = AppState {
        content,
        multimedia,
        upload_policy: upload_policy.clone(),
        contact,
    };

    let token_verifier: Arc<dyn TokenVerifier + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let openapi = ApiDoc::openapi();

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_verifier)))
            .app_data(custom_json_config())
            .app_data(upload_payload_config(upload_policy.max_file_size_bytes));

        if let Some(db) = &db {
            app = app.app_data(web::Data::new(Arc::clone(db)));
        }

        app.service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
        )
        .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::contact::adapter::incoming::web::routes as contact_routes;
    use crate::content::adapter::incoming::web::routes as content_routes;
    use crate::multimedia::adapter::incoming::web::routes as upload_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public
    cfg.service(content_routes::get_site_handler);
    cfg.service(content_routes::get_project_handler);
    cfg.service(contact_routes::submit_contact_message_handler);
    // Admin: content
    cfg.service(content_routes::get_admin_content_handler);
    cfg.service(content_routes::refresh_content_handler);
    cfg.service(content_routes::create_project_handler);
    cfg.service(content_routes::patch_project_handler);
    cfg.service(content_routes::delete_project_handler);
    cfg.service(content_routes::toggle_publish_handler);
    cfg.service(content_routes::create_experience_handler);
    cfg.service(content_routes::patch_experience_handler);
    cfg.service(content_routes::delete_experience_handler);
    cfg.service(content_routes::create_review_handler);
    cfg.service(content_routes::patch_review_handler);
    cfg.service(content_routes::delete_review_handler);
    cfg.service(content_routes::patch_service_handler);
    cfg.service(content_routes::put_resume_url_handler);
    cfg.service(content_routes::create_media_handler);
    cfg.service(content_routes::patch_media_handler);
    cfg.service(content_routes::delete_media_handler);
    // Admin: uploads
    cfg.service(upload_routes::upload_file_handler);
    cfg.service(upload_routes::delete_file_handler);
    // Admin: contact inbox
    cfg.service(contact_routes::list_contact_messages_handler);
    cfg.service(contact_routes::mark_contact_message_read_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
