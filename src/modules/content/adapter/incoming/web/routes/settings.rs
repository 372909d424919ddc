use actix_web::{put, web, Responder};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::admin::AdminUser;
use crate::modules::content::application::ports::incoming::ContentStore;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::store_error;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResumeUrlRequest {
    pub resume_url: String,
}

#[put("/api/admin/settings/resume")]
pub async fn put_resume_url_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    body: web::Json<UpdateResumeUrlRequest>,
) -> impl Responder {
    let url = body.into_inner().resume_url.trim().to_string();

    match data.content.set_resume_url(url.clone()).await {
        Ok(()) => ApiResponse::success(json!({ "resumeUrl": url })),
        Err(e) => store_error("update resume url", e),
    }
}
