use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::entities::{
    MediaDraft, ProjectDraft, ReviewDraft, SiteContent, WorkExperienceDraft,
};
use crate::modules::content::application::domain::patch::{
    MediaPatch, ProjectPatch, ReviewPatch, ServicePatch, WorkExperiencePatch,
};

//
// ──────────────────────────────────────────────────────────
// Load state
// ──────────────────────────────────────────────────────────
// uninitialized → loading → ready
// `ready` is re-entered directly after every mutation refetch.
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
}

impl LoadState {
    /// Consumers render placeholders while this is true.
    pub fn is_loading(&self) -> bool {
        !matches!(self, LoadState::Ready)
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentStoreError {
    /// A remote write was rejected. Nothing was applied locally.
    #[error("Write failed: {0}")]
    WriteFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Content Store
// ──────────────────────────────────────────────────────────
// `add_*` returns the identifier of the new record.
// `update_*` / `delete_*` of an unknown identifier are no-ops.
//

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn snapshot(&self) -> SiteContent;

    async fn load_state(&self) -> LoadState;

    // Projects
    async fn add_project(&self, draft: ProjectDraft) -> Result<String, ContentStoreError>;
    async fn update_project(&self, id: &str, patch: ProjectPatch)
        -> Result<(), ContentStoreError>;
    async fn delete_project(&self, id: &str) -> Result<(), ContentStoreError>;

    /// Flips `is_published` through `update_project`.
    async fn toggle_publish(&self, id: &str) -> Result<(), ContentStoreError> {
        let current = match self.snapshot().await.project(id) {
            Some(project) => project.is_published,
            None => return Ok(()),
        };

        self.update_project(id, ProjectPatch::publish(!current))
            .await
    }

    // Work experience
    async fn add_experience(&self, draft: WorkExperienceDraft)
        -> Result<String, ContentStoreError>;
    async fn update_experience(
        &self,
        id: &str,
        patch: WorkExperiencePatch,
    ) -> Result<(), ContentStoreError>;
    async fn delete_experience(&self, id: &str) -> Result<(), ContentStoreError>;

    // Reviews
    async fn add_review(&self, draft: ReviewDraft) -> Result<String, ContentStoreError>;
    async fn update_review(&self, id: &str, patch: ReviewPatch) -> Result<(), ContentStoreError>;
    async fn delete_review(&self, id: &str) -> Result<(), ContentStoreError>;

    /// In-session only in every variant.
    async fn update_service(&self, id: &str, patch: ServicePatch)
        -> Result<(), ContentStoreError>;

    async fn set_resume_url(&self, url: String) -> Result<(), ContentStoreError>;

    // Media
    async fn add_media(&self, draft: MediaDraft) -> Result<String, ContentStoreError>;
    async fn delete_media(&self, id: &str) -> Result<(), ContentStoreError>;
    /// Never written to the remote backend.
    async fn update_media(&self, id: &str, patch: MediaPatch) -> Result<(), ContentStoreError>;

    /// Re-fetches every collection. No-op for stores without a remote source.
    async fn refresh_data(&self) -> Result<(), ContentStoreError>;
}
