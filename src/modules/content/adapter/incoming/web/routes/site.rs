use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::domain::entities::{Project, SiteContent};
use crate::modules::content::application::ports::incoming::ContentStore;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteView {
    #[serde(flatten)]
    pub content: SiteContent,
    /// True until the first load of the content backend settles.
    pub loading: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskProgress {
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub image_urls: Vec<String>,
    pub task_progress: TaskProgress,
}

impl From<Project> for ProjectDetail {
    fn from(project: Project) -> Self {
        let (completed, total) = project.task_progress();

        Self {
            image_urls: project.image_urls(),
            task_progress: TaskProgress { completed, total },
            project,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Public site content
///
/// Published projects, enabled services, work history, reviews and the résumé link.
#[utoipa::path(
    get,
    path = "/api/site",
    tag = "site",
    responses(
        (status = 200, description = "Public content", body = inline(SuccessResponse<SiteView>)),
    )
)]
#[get("/api/site")]
pub async fn get_site_handler(data: web::Data<AppState>) -> impl Responder {
    let loading = data.content.load_state().await.is_loading();
    let content = data.content.snapshot().await.public_view();

    ApiResponse::success(SiteView { content, loading })
}

/// Published project detail
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "site",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project found", body = inline(SuccessResponse<ProjectDetail>)),
        (
            status = 404,
            description = "Unknown or unpublished project",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PROJECT_NOT_FOUND", "message": "Project not found" }
            })
        ),
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match data.content.snapshot().await.project(&id) {
        Some(project) if project.is_published => {
            ApiResponse::success(ProjectDetail::from(project.clone()))
        }
        _ => ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found"),
    }
}
