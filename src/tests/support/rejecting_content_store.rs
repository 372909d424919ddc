use async_trait::async_trait;

use crate::content::application::domain::defaults::default_content;
use crate::content::application::domain::entities::{
    MediaDraft, ProjectDraft, ReviewDraft, SiteContent, WorkExperienceDraft,
};
use crate::content::application::domain::patch::{
    MediaPatch, ProjectPatch, ReviewPatch, ServicePatch, WorkExperiencePatch,
};
use crate::content::application::ports::incoming::{ContentStore, ContentStoreError, LoadState};

/// Serves the bundled content and rejects every write, like a remote
/// backend refusing changes.
pub struct RejectingContentStore;

fn rejected<T>() -> Result<T, ContentStoreError> {
    Err(ContentStoreError::WriteFailed(
        "permission denied for table".to_string(),
    ))
}

#[async_trait]
impl ContentStore for RejectingContentStore {
    async fn snapshot(&self) -> SiteContent {
        default_content()
    }

    async fn load_state(&self) -> LoadState {
        LoadState::Ready
    }

    async fn add_project(&self, _draft: ProjectDraft) -> Result<String, ContentStoreError> {
        rejected()
    }

    async fn update_project(&self, _id: &str, _patch: ProjectPatch) -> Result<(), ContentStoreError> {
        rejected()
    }

    async fn delete_project(&self, _id: &str) -> Result<(), ContentStoreError> {
        rejected()
    }

    async fn add_experience(
        &self,
        _draft: WorkExperienceDraft,
    ) -> Result<String, ContentStoreError> {
        rejected()
    }

    async fn update_experience(
        &self,
        _id: &str,
        _patch: WorkExperiencePatch,
    ) -> Result<(), ContentStoreError> {
        rejected()
    }

    async fn delete_experience(&self, _id: &str) -> Result<(), ContentStoreError> {
        rejected()
    }

    async fn add_review(&self, _draft: ReviewDraft) -> Result<String, ContentStoreError> {
        rejected()
    }

    async fn update_review(&self, _id: &str, _patch: ReviewPatch) -> Result<(), ContentStoreError> {
        rejected()
    }

    async fn delete_review(&self, _id: &str) -> Result<(), ContentStoreError> {
        rejected()
    }

    async fn update_service(&self, _id: &str, _patch: ServicePatch) -> Result<(), ContentStoreError> {
        rejected()
    }

    async fn set_resume_url(&self, _url: String) -> Result<(), ContentStoreError> {
        rejected()
    }

    async fn add_media(&self, _draft: MediaDraft) -> Result<String, ContentStoreError> {
        rejected()
    }

    async fn delete_media(&self, _id: &str) -> Result<(), ContentStoreError> {
        rejected()
    }

    async fn update_media(&self, _id: &str, _patch: MediaPatch) -> Result<(), ContentStoreError> {
        rejected()
    }

    async fn refresh_data(&self) -> Result<(), ContentStoreError> {
        rejected()
    }
}
