use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::modules::content::application::domain::defaults::default_content;
use crate::modules::content::application::domain::entities::{
    MediaDraft, ProjectDraft, ReviewDraft, SiteContent, WorkExperienceDraft,
};
use crate::modules::content::application::domain::patch::{
    MediaPatch, ProjectPatch, ReviewPatch, ServicePatch, WorkExperiencePatch,
};
use crate::modules::content::application::domain::snapshot::{
    decode_snapshot, encode_snapshot, SNAPSHOT_KEY,
};
use crate::modules::content::application::ports::incoming::{
    ContentStore, ContentStoreError, LoadState,
};
use crate::modules::content::application::ports::outgoing::KeyValueStore;

//
// ──────────────────────────────────────────────────────────
// Local-only store
// ──────────────────────────────────────────────────────────
// Mutations apply to memory, then the whole content is written under
// SNAPSHOT_KEY. The write happens while the lock is held so snapshots land
// in mutation order. Storage failures are logged and swallowed.
//

pub struct LocalContentStore<K>
where
    K: KeyValueStore,
{
    storage: K,
    content: RwLock<SiteContent>,
}

impl<K> LocalContentStore<K>
where
    K: KeyValueStore,
{
    /// Restores the persisted snapshot, or seeds the bundled defaults when
    /// there is none or it cannot be read.
    pub async fn open(storage: K) -> Self {
        let content = match storage.get(SNAPSHOT_KEY).await {
            Ok(Some(raw)) => match decode_snapshot(&raw) {
                Ok(content) => {
                    info!("Restored site content snapshot");
                    content
                }
                Err(e) => {
                    warn!("Ignoring unreadable site content snapshot: {}", e);
                    default_content()
                }
            },
            Ok(None) => {
                info!("No site content snapshot found, seeding defaults");
                default_content()
            }
            Err(e) => {
                warn!("Failed to read site content snapshot: {}", e);
                default_content()
            }
        };

        let store = Self::with_content(storage, content);
        {
            let content = store.content.read().await;
            store.persist(&content).await;
        }
        store
    }

    /// Starts from `content` without touching storage until the first mutation.
    pub fn with_content(storage: K, content: SiteContent) -> Self {
        Self {
            storage,
            content: RwLock::new(content),
        }
    }

    async fn persist(&self, content: &SiteContent) {
        let raw = match encode_snapshot(content) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to encode site content snapshot: {}", e);
                return;
            }
        };

        match self.storage.set(SNAPSHOT_KEY, raw).await {
            Ok(()) => debug!("Site content snapshot saved"),
            Err(e) => warn!("Failed to save site content snapshot: {}", e),
        }
    }

    async fn mutate<F>(&self, apply: F)
    where
        F: FnOnce(&mut SiteContent) + Send,
    {
        let mut content = self.content.write().await;
        apply(&mut content);
        self.persist(&content).await;
    }

    fn provisional_id() -> String {
        Uuid::new_v4().to_string()
    }
}

#[async_trait]
impl<K> ContentStore for LocalContentStore<K>
where
    K: KeyValueStore + Send + Sync,
{
    async fn snapshot(&self) -> SiteContent {
        self.content.read().await.clone()
    }

    async fn load_state(&self) -> LoadState {
        LoadState::Ready
    }

    async fn add_project(&self, draft: ProjectDraft) -> Result<String, ContentStoreError> {
        let id = Self::provisional_id();
        let project = draft.into_project(id.clone());
        self.mutate(|content| content.projects.push(project)).await;
        Ok(id)
    }

    async fn update_project(
        &self,
        id: &str,
        patch: ProjectPatch,
    ) -> Result<(), ContentStoreError> {
        self.mutate(|content| {
            if let Some(project) = content.projects.iter_mut().find(|p| p.id == id) {
                patch.apply_to(project);
            }
        })
        .await;
        Ok(())
    }

    async fn delete_project(&self, id: &str) -> Result<(), ContentStoreError> {
        self.mutate(|content| content.projects.retain(|p| p.id != id))
            .await;
        Ok(())
    }

    async fn add_experience(
        &self,
        draft: WorkExperienceDraft,
    ) -> Result<String, ContentStoreError> {
        let id = Self::provisional_id();
        let new_id = id.clone();
        self.mutate(move |content| {
            let position = content.work_experience.len() as i32;
            content
                .work_experience
                .push(draft.into_experience(new_id, position));
        })
        .await;
        Ok(id)
    }

    async fn update_experience(
        &self,
        id: &str,
        patch: WorkExperiencePatch,
    ) -> Result<(), ContentStoreError> {
        self.mutate(|content| {
            if let Some(experience) = content.work_experience.iter_mut().find(|e| e.id == id) {
                patch.apply_to(experience);
            }
        })
        .await;
        Ok(())
    }

    async fn delete_experience(&self, id: &str) -> Result<(), ContentStoreError> {
        self.mutate(|content| content.work_experience.retain(|e| e.id != id))
            .await;
        Ok(())
    }

    async fn add_review(&self, draft: ReviewDraft) -> Result<String, ContentStoreError> {
        let id = Self::provisional_id();
        let review = draft.into_review(id.clone());
        self.mutate(|content| content.reviews.push(review)).await;
        Ok(id)
    }

    async fn update_review(&self, id: &str, patch: ReviewPatch) -> Result<(), ContentStoreError> {
        self.mutate(|content| {
            if let Some(review) = content.reviews.iter_mut().find(|r| r.id == id) {
                patch.apply_to(review);
            }
        })
        .await;
        Ok(())
    }

    async fn delete_review(&self, id: &str) -> Result<(), ContentStoreError> {
        self.mutate(|content| content.reviews.retain(|r| r.id != id))
            .await;
        Ok(())
    }

    async fn update_service(
        &self,
        id: &str,
        patch: ServicePatch,
    ) -> Result<(), ContentStoreError> {
        self.mutate(|content| {
            if let Some(service) = content.services.iter_mut().find(|s| s.id == id) {
                patch.apply_to(service);
            }
        })
        .await;
        Ok(())
    }

    async fn set_resume_url(&self, url: String) -> Result<(), ContentStoreError> {
        self.mutate(|content| content.resume_url = url).await;
        Ok(())
    }

    async fn add_media(&self, draft: MediaDraft) -> Result<String, ContentStoreError> {
        let id = Self::provisional_id();
        let item = draft.into_media_item(id.clone(), Utc::now().to_rfc3339());
        self.mutate(|content| content.media.push(item)).await;
        Ok(id)
    }

    async fn delete_media(&self, id: &str) -> Result<(), ContentStoreError> {
        self.mutate(|content| content.media.retain(|m| m.id != id))
            .await;
        Ok(())
    }

    async fn update_media(&self, id: &str, patch: MediaPatch) -> Result<(), ContentStoreError> {
        self.mutate(|content| {
            if let Some(item) = content.media.iter_mut().find(|m| m.id == id) {
                patch.apply_to(item);
            }
        })
        .await;
        Ok(())
    }

    async fn refresh_data(&self) -> Result<(), ContentStoreError> {
        Ok(())
    }
}
