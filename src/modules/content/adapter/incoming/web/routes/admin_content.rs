use actix_web::{get, post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::admin::AdminUser;
use crate::modules::content::application::domain::entities::SiteContent;
use crate::modules::content::application::ports::incoming::{ContentStore, LoadState};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::store_error;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminContentView {
    #[serde(flatten)]
    pub content: SiteContent,
    pub load_state: LoadState,
    pub loading: bool,
}

/// Full content including drafts and media
#[utoipa::path(
    get,
    path = "/api/admin/content",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Everything the store holds", body = inline(SuccessResponse<AdminContentView>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/admin/content")]
pub async fn get_admin_content_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let load_state = data.content.load_state().await;

    ApiResponse::success(AdminContentView {
        content: data.content.snapshot().await,
        loading: load_state.is_loading(),
        load_state,
    })
}

#[post("/api/admin/refresh")]
pub async fn refresh_content_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.refresh_data().await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => store_error("refresh content", e),
    }
}
