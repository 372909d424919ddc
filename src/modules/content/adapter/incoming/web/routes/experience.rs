use actix_web::{delete, patch, post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::admin::AdminUser;
use crate::modules::content::application::domain::entities::WorkExperienceDraft;
use crate::modules::content::application::domain::patch::{PatchField, WorkExperiencePatch};
use crate::modules::content::application::ports::incoming::ContentStore;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{created_record, require_text, store_error, updated_record};

#[post("/api/admin/experience")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    body: web::Json<WorkExperienceDraft>,
) -> impl Responder {
    let draft = body.into_inner();
    if let Err(resp) = require_text(&draft.company, "INVALID_COMPANY", "Company") {
        return resp;
    }
    if let Err(resp) = require_text(&draft.role, "INVALID_ROLE", "Role") {
        return resp;
    }

    match data.content.add_experience(draft).await {
        Ok(id) => {
            let record = data.content.snapshot().await.experience(&id).cloned();
            created_record(record, id)
        }
        Err(e) => store_error("create work experience", e),
    }
}

#[patch("/api/admin/experience/{id}")]
pub async fn patch_experience_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<WorkExperiencePatch>,
) -> impl Responder {
    let id = path.into_inner();
    let patch = body.into_inner();

    if let PatchField::Value(company) = &patch.company {
        if let Err(resp) = require_text(company, "INVALID_COMPANY", "Company") {
            return resp;
        }
    }

    if let Err(e) = data.content.update_experience(&id, patch).await {
        return store_error("update work experience", e);
    }

    let record = data.content.snapshot().await.experience(&id).cloned();
    updated_record(record, "EXPERIENCE_NOT_FOUND", "Work experience not found")
}

#[delete("/api/admin/experience/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.content.delete_experience(&path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => store_error("delete work experience", e),
    }
}
