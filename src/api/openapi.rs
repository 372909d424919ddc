use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::contact::adapter::incoming::web::routes::SubmitContactMessageRequest;
use crate::contact::application::domain::entities::ContactMessage;
use crate::content::adapter::incoming::web::routes::{
    AdminContentView, ProjectDetail, SiteView, TaskProgress, UpdateResumeUrlRequest,
};
use crate::content::application::domain::entities::{
    MediaItem, Project, ProjectDraft, ProjectStatus, Review, Service, ServiceIcon, SiteContent,
    Task, WorkExperience,
};
use crate::content::application::ports::incoming::LoadState;
use crate::multimedia::adapter::incoming::web::routes::{DeleteFileRequest, UploadFileResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Public content, contact form and admin editing for the portfolio site",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Public
        crate::content::adapter::incoming::web::routes::get_site_handler,
        crate::content::adapter::incoming::web::routes::get_project_handler,
        crate::contact::adapter::incoming::web::routes::submit_contact_message_handler,

        // Admin
        crate::content::adapter::incoming::web::routes::get_admin_content_handler,
        crate::content::adapter::incoming::web::routes::create_project_handler,
        crate::multimedia::adapter::incoming::web::routes::upload_file_handler,
        crate::multimedia::adapter::incoming::web::routes::delete_file_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<SiteView>,
            ErrorResponse,
            ErrorDetail,

            // Content
            SiteContent,
            SiteView,
            AdminContentView,
            LoadState,
            Project,
            ProjectDraft,
            ProjectDetail,
            ProjectStatus,
            Task,
            TaskProgress,
            WorkExperience,
            Review,
            Service,
            ServiceIcon,
            MediaItem,
            UpdateResumeUrlRequest,

            // Contact
            SubmitContactMessageRequest,
            ContactMessage,

            // Uploads
            UploadFileResponse,
            DeleteFileRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "site", description = "Public site content"),
        (name = "contact", description = "Contact form"),
        (name = "admin", description = "Content editing, uploads and inbox"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the auth provider"))
                        .build(),
                ),
            )
        }
    }
}
