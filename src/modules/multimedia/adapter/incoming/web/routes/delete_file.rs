use actix_web::{delete, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::admin::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteFileRequest {
    #[schema(example = "portfolio")]
    pub bucket: String,
    /// Public URL returned by the upload
    pub url: String,
}

/// Delete an uploaded file
///
/// Best effort. Always 204, storage failures are only logged.
#[utoipa::path(
    delete,
    path = "/api/admin/uploads",
    tag = "admin",
    security(("BearerAuth" = [])),
    request_body = DeleteFileRequest,
    responses(
        (status = 204, description = "Deletion attempted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 503, description = "Uploads are not configured", body = ErrorResponse),
    )
)]
#[delete("/api/admin/uploads")]
pub async fn delete_file_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    body: web::Json<DeleteFileRequest>,
) -> impl Responder {
    let Some(multimedia) = data.multimedia.as_ref() else {
        return ApiResponse::service_unavailable(
            "UPLOADS_DISABLED",
            "File storage is not configured",
        );
    };

    let body = body.into_inner();
    multimedia.delete_file.execute(&body.bucket, &body.url).await;

    ApiResponse::no_content()
}
