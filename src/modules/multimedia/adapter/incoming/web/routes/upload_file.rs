use actix_web::{http::header::CONTENT_TYPE, post, web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::admin::AdminUser;
use crate::multimedia::application::domain::policies::UploadPolicyError;
use crate::multimedia::application::ports::incoming::use_cases::{
    UploadMediaCommand, UploadMediaError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UploadFileQuery {
    /// Target bucket
    #[param(example = "portfolio")]
    pub bucket: String,
    /// Optional folder inside the bucket
    #[param(example = "projects")]
    pub folder: Option<String>,
    /// Original file name, used for the extension
    #[param(example = "screenshot.png")]
    pub file_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadFileResponse {
    #[schema(example = "https://xyz.supabase.co/storage/v1/object/public/portfolio/projects/1714557600000-k3j9x0a2qz.png")]
    pub url: String,
    #[schema(example = "projects/1714557600000-k3j9x0a2qz.png")]
    pub path: String,
}

/// Upload a file
///
/// The raw request body is stored under a generated unique name and its public URL is returned.
#[utoipa::path(
    post,
    path = "/api/admin/uploads",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(UploadFileQuery),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "File stored", body = inline(SuccessResponse<UploadFileResponse>)),
        (
            status = 400,
            description = "Rejected by the upload policy",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "FILE_TOO_LARGE", "message": "File too large (max 10485760 bytes, got 12000000 bytes)" }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 502, description = "Storage rejected the upload", body = ErrorResponse),
        (status = 503, description = "Uploads are not configured", body = ErrorResponse),
    )
)]
#[post("/api/admin/uploads")]
pub async fn upload_file_handler(
    _admin: AdminUser,
    req: HttpRequest,
    data: web::Data<AppState>,
    query: web::Query<UploadFileQuery>,
    body: web::Bytes,
) -> impl Responder {
    let Some(multimedia) = data.multimedia.as_ref() else {
        return ApiResponse::service_unavailable(
            "UPLOADS_DISABLED",
            "File storage is not configured",
        );
    };

    let query = query.into_inner();
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let command = match UploadMediaCommand::try_new(
        query.bucket,
        query.folder,
        query.file_name,
        content_type,
        body.to_vec(),
        &data.upload_policy,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_policy_error(e),
    };

    info!(
        bucket = command.bucket(),
        file_name = command.file_name(),
        size = command.size(),
        "Uploading file"
    );

    match multimedia.upload.execute(command).await {
        Ok(uploaded) => ApiResponse::created(UploadFileResponse {
            url: uploaded.url,
            path: uploaded.path,
        }),
        Err(UploadMediaError::InvalidUpload(e)) => map_policy_error(e),
        Err(UploadMediaError::StorageError(msg)) => {
            error!("Upload failed: {}", msg);
            ApiResponse::bad_gateway("STORAGE_ERROR", "The file could not be stored")
        }
    }
}

fn map_policy_error(e: UploadPolicyError) -> HttpResponse {
    let code = match &e {
        UploadPolicyError::InvalidFileName => "INVALID_FILE_NAME",
        UploadPolicyError::InvalidBucket(_) => "INVALID_BUCKET",
        UploadPolicyError::InvalidFolder(_) => "INVALID_FOLDER",
        UploadPolicyError::EmptyFile => "EMPTY_FILE",
        UploadPolicyError::FileTooLarge { .. } => "FILE_TOO_LARGE",
    };

    ApiResponse::bad_request(code, &e.to_string())
}
