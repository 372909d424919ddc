use actix_web::{patch, web, Responder};

use crate::auth::adapter::incoming::web::extractors::admin::AdminUser;
use crate::modules::content::application::domain::patch::ServicePatch;
use crate::modules::content::application::ports::incoming::ContentStore;
use crate::AppState;

use super::{store_error, updated_record};

/// Service edits live for the current process only.
#[patch("/api/admin/services/{id}")]
pub async fn patch_service_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ServicePatch>,
) -> impl Responder {
    let id = path.into_inner();

    if let Err(e) = data.content.update_service(&id, body.into_inner()).await {
        return store_error("update service", e);
    }

    let record = data.content.snapshot().await.service(&id).cloned();
    updated_record(record, "SERVICE_NOT_FOUND", "Service not found")
}
