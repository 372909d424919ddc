use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::contact::application::domain::entities::ContactMessage;
use crate::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageCommand, SubmitContactMessageCommandError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContactMessageRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    /// Defaults to "Web Application"
    #[serde(default)]
    #[schema(example = "Mobile App")]
    pub project_type: Option<String>,

    #[schema(example = "I'd like a portfolio site for my studio.")]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Submit a contact message
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<ContactMessage>)),
        (
            status = 400,
            description = "Invalid submission",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_EMAIL", "message": "Invalid email address" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_message_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubmitContactMessageRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match SubmitContactMessageCommand::new(
        payload.name,
        payload.email,
        payload.project_type,
        payload.message,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.contact.submit.execute(command).await {
        Ok(message) => ApiResponse::created(message),
        Err(e) => {
            error!("Failed to store contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(err: SubmitContactMessageCommandError) -> HttpResponse {
    let code = match err {
        SubmitContactMessageCommandError::EmptyName => "EMPTY_NAME",
        SubmitContactMessageCommandError::NameTooLong => "NAME_TOO_LONG",
        SubmitContactMessageCommandError::InvalidEmail => "INVALID_EMAIL",
        SubmitContactMessageCommandError::EmptyMessage => "EMPTY_MESSAGE",
        SubmitContactMessageCommandError::MessageTooLong => "MESSAGE_TOO_LONG",
    };

    ApiResponse::bad_request(code, &err.to_string())
}
