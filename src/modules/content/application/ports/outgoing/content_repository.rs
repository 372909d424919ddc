// src/modules/content/application/ports/outgoing/content_repository.rs

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::content::application::domain::entities::{
    MediaDraft, MediaItem, Project, ProjectDraft, Review, ReviewDraft, SiteSettings,
    WorkExperience, WorkExperienceDraft,
};
use crate::modules::content::application::domain::patch::{
    ProjectPatch, ReviewPatch, WorkExperiencePatch,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentRepositoryError {
    /// No row with this identifier (including identifiers that cannot be a row id).
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Ports (remote data access, one per collection)
// ──────────────────────────────────────────────────────────
// Every `list_*` returns the collection in its display order.
// `patch_*` returns NotFound when nothing matched.
// `delete_*` of an unknown id is Ok.
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Newest first by creation time.
    async fn list_projects(&self) -> Result<Vec<Project>, ContentRepositoryError>;

    async fn insert_project(&self, data: ProjectDraft) -> Result<Project, ContentRepositoryError>;

    async fn patch_project(&self, id: &str, data: ProjectPatch)
        -> Result<(), ContentRepositoryError>;

    async fn delete_project(&self, id: &str) -> Result<(), ContentRepositoryError>;
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Ascending `sort_order`.
    async fn list_experience(&self) -> Result<Vec<WorkExperience>, ContentRepositoryError>;

    async fn insert_experience(
        &self,
        data: WorkExperienceDraft,
    ) -> Result<WorkExperience, ContentRepositoryError>;

    async fn patch_experience(
        &self,
        id: &str,
        data: WorkExperiencePatch,
    ) -> Result<(), ContentRepositoryError>;

    async fn delete_experience(&self, id: &str) -> Result<(), ContentRepositoryError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Newest first by creation time.
    async fn list_reviews(&self) -> Result<Vec<Review>, ContentRepositoryError>;

    async fn insert_review(&self, data: ReviewDraft) -> Result<Review, ContentRepositoryError>;

    async fn patch_review(&self, id: &str, data: ReviewPatch)
        -> Result<(), ContentRepositoryError>;

    async fn delete_review(&self, id: &str) -> Result<(), ContentRepositoryError>;
}

/// Media metadata edits are never written remotely, hence no patch.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Newest first by upload time.
    async fn list_media(&self) -> Result<Vec<MediaItem>, ContentRepositoryError>;

    async fn insert_media(&self, data: MediaDraft) -> Result<MediaItem, ContentRepositoryError>;

    async fn delete_media(&self, id: &str) -> Result<(), ContentRepositoryError>;
}

/// Singleton row.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get_settings(&self) -> Result<SiteSettings, ContentRepositoryError>;

    async fn set_resume_url(&self, url: &str) -> Result<(), ContentRepositoryError>;
}

#[derive(Clone)]
pub struct ContentRepositories {
    pub projects: Arc<dyn ProjectRepository + Send + Sync>,
    pub experience: Arc<dyn ExperienceRepository + Send + Sync>,
    pub reviews: Arc<dyn ReviewRepository + Send + Sync>,
    pub media: Arc<dyn MediaRepository + Send + Sync>,
    pub settings: Arc<dyn SettingsRepository + Send + Sync>,
}
