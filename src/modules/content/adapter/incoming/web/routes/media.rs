use actix_web::{delete, patch, post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::admin::AdminUser;
use crate::modules::content::application::domain::entities::MediaDraft;
use crate::modules::content::application::domain::patch::MediaPatch;
use crate::modules::content::application::ports::incoming::ContentStore;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{created_record, require_text, store_error, updated_record};

/// Registers an already uploaded file in the media library.
#[post("/api/admin/media")]
pub async fn create_media_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    body: web::Json<MediaDraft>,
) -> impl Responder {
    let draft = body.into_inner();
    if let Err(resp) = require_text(&draft.url, "INVALID_URL", "URL") {
        return resp;
    }

    match data.content.add_media(draft).await {
        Ok(id) => {
            let record = data.content.snapshot().await.media_item(&id).cloned();
            created_record(record, id)
        }
        Err(e) => store_error("register media", e),
    }
}

#[patch("/api/admin/media/{id}")]
pub async fn patch_media_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<MediaPatch>,
) -> impl Responder {
    let id = path.into_inner();

    if let Err(e) = data.content.update_media(&id, body.into_inner()).await {
        return store_error("update media", e);
    }

    let record = data.content.snapshot().await.media_item(&id).cloned();
    updated_record(record, "MEDIA_NOT_FOUND", "Media item not found")
}

/// Removes the library entry. The stored file is left alone.
#[delete("/api/admin/media/{id}")]
pub async fn delete_media_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.content.delete_media(&path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => store_error("delete media", e),
    }
}
