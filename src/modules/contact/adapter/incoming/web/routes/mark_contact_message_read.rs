use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::admin::AdminUser;
use crate::contact::application::ports::incoming::use_cases::MarkContactMessageReadError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/contact-messages/{id}/read")]
pub async fn mark_contact_message_read_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("MESSAGE_NOT_FOUND", "Contact message not found");
    };

    match data.contact.mark_read.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(MarkContactMessageReadError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Contact message not found")
        }
        Err(e) => {
            error!("Failed to mark contact message {} read: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
