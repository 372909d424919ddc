mod admin_content;
mod experience;
mod media;
mod projects;
mod reviews;
mod services;
mod settings;
mod site;

use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::modules::content::application::ports::incoming::ContentStoreError;
use crate::shared::api::ApiResponse;

pub use admin_content::{
    __path_get_admin_content_handler, get_admin_content_handler, refresh_content_handler,
    AdminContentView,
};
pub use experience::{
    create_experience_handler, delete_experience_handler, patch_experience_handler,
};
pub use media::{create_media_handler, delete_media_handler, patch_media_handler};
pub use projects::{
    __path_create_project_handler, create_project_handler, delete_project_handler,
    patch_project_handler, toggle_publish_handler,
};
pub use reviews::{create_review_handler, delete_review_handler, patch_review_handler};
pub use services::patch_service_handler;
pub use settings::{put_resume_url_handler, UpdateResumeUrlRequest};
pub use site::{
    __path_get_project_handler, __path_get_site_handler, get_project_handler, get_site_handler,
    ProjectDetail, SiteView, TaskProgress,
};

//
// ──────────────────────────────────────────────────────────
// Shared response helpers
// ──────────────────────────────────────────────────────────
//

fn store_error(action: &str, e: ContentStoreError) -> HttpResponse {
    error!("Failed to {}: {}", action, e);

    match e {
        ContentStoreError::WriteFailed(_) => ApiResponse::bad_gateway(
            "WRITE_FAILED",
            "The content backend rejected the change",
        ),
    }
}

/// 201 with the stored record, or just its id when the refreshed content
/// does not contain it.
fn created_record<T: Serialize>(record: Option<T>, id: String) -> HttpResponse {
    match record {
        Some(record) => ApiResponse::created(json!(record)),
        None => ApiResponse::created(json!({ "id": id })),
    }
}

fn require_text(value: &str, code: &str, field: &str) -> Result<(), HttpResponse> {
    if value.trim().is_empty() {
        return Err(ApiResponse::bad_request(
            code,
            &format!("{} cannot be empty", field),
        ));
    }
    Ok(())
}

fn validate_rating(rating: i32) -> Result<(), HttpResponse> {
    use crate::modules::content::application::domain::entities::MAX_RATING;

    if !(1..=MAX_RATING).contains(&rating) {
        return Err(ApiResponse::bad_request(
            "INVALID_RATING",
            &format!("Rating must be between 1 and {}", MAX_RATING),
        ));
    }
    Ok(())
}

/// 200 with the record after a patch, 404 when the id was unknown.
fn updated_record<T: Serialize>(record: Option<T>, code: &str, message: &str) -> HttpResponse {
    match record {
        Some(record) => ApiResponse::success(json!(record)),
        None => ApiResponse::not_found(code, message),
    }
}
