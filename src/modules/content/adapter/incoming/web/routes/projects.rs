use actix_web::{delete, patch, post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::admin::AdminUser;
use crate::modules::content::application::domain::entities::{Project, ProjectDraft};
use crate::modules::content::application::domain::patch::{PatchField, ProjectPatch};
use crate::modules::content::application::ports::incoming::ContentStore;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{created_record, require_text, store_error, updated_record};

const NOT_FOUND: (&str, &str) = ("PROJECT_NOT_FOUND", "Project not found");

/// Create a project
///
/// Drafts are hidden from the public site until published.
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "admin",
    security(("BearerAuth" = [])),
    request_body = ProjectDraft,
    responses(
        (status = 201, description = "Project stored", body = inline(SuccessResponse<Project>)),
        (
            status = 400,
            description = "Title missing",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_TITLE", "message": "Title cannot be empty" }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 502, description = "Backend rejected the write", body = ErrorResponse),
    )
)]
#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    body: web::Json<ProjectDraft>,
) -> impl Responder {
    let draft = body.into_inner();
    if let Err(resp) = require_text(&draft.title, "INVALID_TITLE", "Title") {
        return resp;
    }

    match data.content.add_project(draft).await {
        Ok(id) => {
            let record = data.content.snapshot().await.project(&id).cloned();
            created_record(record, id)
        }
        Err(e) => store_error("create project", e),
    }
}

#[patch("/api/admin/projects/{id}")]
pub async fn patch_project_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ProjectPatch>,
) -> impl Responder {
    let id = path.into_inner();
    let patch = body.into_inner();

    if let PatchField::Value(title) = &patch.title {
        if let Err(resp) = require_text(title, "INVALID_TITLE", "Title") {
            return resp;
        }
    }

    if let Err(e) = data.content.update_project(&id, patch).await {
        return store_error("update project", e);
    }

    let record = data.content.snapshot().await.project(&id).cloned();
    updated_record(record, NOT_FOUND.0, NOT_FOUND.1)
}

#[post("/api/admin/projects/{id}/toggle-publish")]
pub async fn toggle_publish_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    if let Err(e) = data.content.toggle_publish(&id).await {
        return store_error("toggle project visibility", e);
    }

    let record = data.content.snapshot().await.project(&id).cloned();
    updated_record(record, NOT_FOUND.0, NOT_FOUND.1)
}

#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.content.delete_project(&path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => store_error("delete project", e),
    }
}
