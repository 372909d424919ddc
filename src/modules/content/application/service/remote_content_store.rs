use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::modules::content::application::domain::defaults::{
    default_services, DEFAULT_RESUME_URL,
};
use crate::modules::content::application::domain::entities::{
    MediaDraft, ProjectDraft, ReviewDraft, SiteContent, WorkExperienceDraft,
};
use crate::modules::content::application::domain::patch::{
    MediaPatch, ProjectPatch, ReviewPatch, ServicePatch, WorkExperiencePatch,
};
use crate::modules::content::application::ports::incoming::{
    ContentStore, ContentStoreError, LoadState,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepositories, ContentRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Remote-backed store
// ──────────────────────────────────────────────────────────
// Every write goes to the repositories first. Only after it succeeds are
// all five collections fetched again (in parallel) and swapped in as one
// unit. Services and media metadata edits never leave memory.
//

struct RemoteState {
    content: SiteContent,
    load_state: LoadState,
}

pub struct RemoteContentStore {
    repositories: ContentRepositories,
    state: RwLock<RemoteState>,
}

impl RemoteContentStore {
    pub fn new(repositories: ContentRepositories) -> Self {
        Self {
            repositories,
            state: RwLock::new(RemoteState {
                content: SiteContent {
                    services: default_services(),
                    resume_url: DEFAULT_RESUME_URL.to_string(),
                    ..Default::default()
                },
                load_state: LoadState::Uninitialized,
            }),
        }
    }

    /// Initial fetch. Read failures are logged, never returned.
    pub async fn load(&self) {
        self.state.write().await.load_state = LoadState::Loading;
        info!("Loading site content from remote store");

        self.refetch().await;
        info!("Site content ready");
    }

    /// Fetches every collection and replaces the in-memory state. A failed
    /// collection keeps its last-known value.
    async fn refetch(&self) {
        let (projects, experience, reviews, media, settings) = futures::join!(
            self.repositories.projects.list_projects(),
            self.repositories.experience.list_experience(),
            self.repositories.reviews.list_reviews(),
            self.repositories.media.list_media(),
            self.repositories.settings.get_settings(),
        );

        let mut state = self.state.write().await;
        let mut next = state.content.clone();

        match projects {
            Ok(projects) => next.projects = projects,
            Err(e) => error!("Failed to fetch projects: {}", e),
        }
        match experience {
            Ok(experience) => next.work_experience = experience,
            Err(e) => error!("Failed to fetch work experience: {}", e),
        }
        match reviews {
            Ok(reviews) => next.reviews = reviews,
            Err(e) => error!("Failed to fetch reviews: {}", e),
        }
        match media {
            Ok(media) => next.media = media,
            Err(e) => error!("Failed to fetch media: {}", e),
        }
        match settings {
            Ok(settings) => next.resume_url = settings.resume_url,
            Err(e) => error!("Failed to fetch site settings: {}", e),
        }

        state.content = next;
        state.load_state = LoadState::Ready;
        debug!("Site content refetched");
    }

    /// Refetches after a successful write. An unknown id is not an error.
    async fn settle<T>(
        &self,
        result: Result<T, ContentRepositoryError>,
    ) -> Result<Option<T>, ContentStoreError> {
        let value = match result {
            Ok(value) => Some(value),
            Err(ContentRepositoryError::NotFound) => None,
            Err(e) => {
                error!("Remote write failed: {}", e);
                return Err(ContentStoreError::WriteFailed(e.to_string()));
            }
        };

        self.refetch().await;
        Ok(value)
    }
}

#[async_trait]
impl ContentStore for RemoteContentStore {
    async fn snapshot(&self) -> SiteContent {
        self.state.read().await.content.clone()
    }

    async fn load_state(&self) -> LoadState {
        self.state.read().await.load_state
    }

    async fn add_project(&self, draft: ProjectDraft) -> Result<String, ContentStoreError> {
        let result = self.repositories.projects.insert_project(draft).await;
        self.settle(result)
            .await?
            .map(|project| project.id)
            .ok_or_else(|| ContentStoreError::WriteFailed("insert returned no row".to_string()))
    }

    async fn update_project(
        &self,
        id: &str,
        patch: ProjectPatch,
    ) -> Result<(), ContentStoreError> {
        let result = self.repositories.projects.patch_project(id, patch).await;
        self.settle(result).await.map(|_| ())
    }

    async fn delete_project(&self, id: &str) -> Result<(), ContentStoreError> {
        let result = self.repositories.projects.delete_project(id).await;
        self.settle(result).await.map(|_| ())
    }

    async fn add_experience(
        &self,
        mut draft: WorkExperienceDraft,
    ) -> Result<String, ContentStoreError> {
        if draft.sort_order.is_none() {
            let count = self.state.read().await.content.work_experience.len();
            draft.sort_order = Some(count as i32);
        }

        let result = self.repositories.experience.insert_experience(draft).await;
        self.settle(result)
            .await?
            .map(|experience| experience.id)
            .ok_or_else(|| ContentStoreError::WriteFailed("insert returned no row".to_string()))
    }

    async fn update_experience(
        &self,
        id: &str,
        patch: WorkExperiencePatch,
    ) -> Result<(), ContentStoreError> {
        let result = self
            .repositories
            .experience
            .patch_experience(id, patch)
            .await;
        self.settle(result).await.map(|_| ())
    }

    async fn delete_experience(&self, id: &str) -> Result<(), ContentStoreError> {
        let result = self.repositories.experience.delete_experience(id).await;
        self.settle(result).await.map(|_| ())
    }

    async fn add_review(&self, draft: ReviewDraft) -> Result<String, ContentStoreError> {
        let result = self.repositories.reviews.insert_review(draft).await;
        self.settle(result)
            .await?
            .map(|review| review.id)
            .ok_or_else(|| ContentStoreError::WriteFailed("insert returned no row".to_string()))
    }

    async fn update_review(&self, id: &str, patch: ReviewPatch) -> Result<(), ContentStoreError> {
        let result = self.repositories.reviews.patch_review(id, patch).await;
        self.settle(result).await.map(|_| ())
    }

    async fn delete_review(&self, id: &str) -> Result<(), ContentStoreError> {
        let result = self.repositories.reviews.delete_review(id).await;
        self.settle(result).await.map(|_| ())
    }

    async fn update_service(
        &self,
        id: &str,
        patch: ServicePatch,
    ) -> Result<(), ContentStoreError> {
        let mut state = self.state.write().await;
        if let Some(service) = state.content.services.iter_mut().find(|s| s.id == id) {
            patch.apply_to(service);
        }
        Ok(())
    }

    async fn set_resume_url(&self, url: String) -> Result<(), ContentStoreError> {
        let result = self.repositories.settings.set_resume_url(&url).await;
        self.settle(result).await.map(|_| ())
    }

    async fn add_media(&self, mut draft: MediaDraft) -> Result<String, ContentStoreError> {
        if draft.uploaded_at.is_none() {
            draft.uploaded_at = Some(Utc::now().to_rfc3339());
        }

        let result = self.repositories.media.insert_media(draft).await;
        self.settle(result)
            .await?
            .map(|item| item.id)
            .ok_or_else(|| ContentStoreError::WriteFailed("insert returned no row".to_string()))
    }

    async fn delete_media(&self, id: &str) -> Result<(), ContentStoreError> {
        let result = self.repositories.media.delete_media(id).await;
        self.settle(result).await.map(|_| ())
    }

    async fn update_media(&self, id: &str, patch: MediaPatch) -> Result<(), ContentStoreError> {
        let mut state = self.state.write().await;
        if let Some(item) = state.content.media.iter_mut().find(|m| m.id == id) {
            patch.apply_to(item);
        }
        Ok(())
    }

    async fn refresh_data(&self) -> Result<(), ContentStoreError> {
        self.refetch().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use crate::modules::content::application::domain::defaults::default_content;
    use crate::modules::content::application::domain::entities::{
        MediaItem, Project, Review, SiteSettings, WorkExperience,
    };
    use crate::modules::content::application::domain::patch::PatchField;
    use crate::modules::content::application::ports::outgoing::{
        ExperienceRepository, MediaRepository, ProjectRepository, ReviewRepository,
        SettingsRepository,
    };
    use crate::tests::support::content_fixtures::{
        sample_media_draft, sample_project_draft, sample_review_draft,
    };

    // In-memory stand-in for the hosted tables. Ids are assigned here, the
    // way the database would.
    #[derive(Default)]
    struct FakeBackend {
        projects: Mutex<Vec<Project>>,
        experience: Mutex<Vec<WorkExperience>>,
        reviews: Mutex<Vec<Review>>,
        media: Mutex<Vec<MediaItem>>,
        resume_url: Mutex<String>,
        next_id: AtomicUsize,
        fail_writes: AtomicBool,
        fail_project_reads: AtomicBool,
        project_reads: AtomicUsize,
    }

    impl FakeBackend {
        fn seeded() -> Arc<Self> {
            let content = default_content();
            let backend = Self::default();
            *backend.projects.lock().unwrap() = content.projects;
            *backend.experience.lock().unwrap() = content.work_experience;
            *backend.reviews.lock().unwrap() = content.reviews;
            *backend.resume_url.lock().unwrap() = "https://cdn/cv.pdf".to_string();
            backend.next_id.store(100, Ordering::SeqCst);
            Arc::new(backend)
        }

        fn next_id(&self) -> String {
            self.next_id.fetch_add(1, Ordering::SeqCst).to_string()
        }

        fn check_write(&self) -> Result<(), ContentRepositoryError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                Err(ContentRepositoryError::DatabaseError("connection reset".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ProjectRepository for FakeBackend {
        async fn list_projects(&self) -> Result<Vec<Project>, ContentRepositoryError> {
            self.project_reads.fetch_add(1, Ordering::SeqCst);
            if self.fail_project_reads.load(Ordering::SeqCst) {
                return Err(ContentRepositoryError::DatabaseError("timeout".to_string()));
            }
            Ok(self.projects.lock().unwrap().clone())
        }

        async fn insert_project(
            &self,
            data: ProjectDraft,
        ) -> Result<Project, ContentRepositoryError> {
            self.check_write()?;
            let project = data.into_project(self.next_id());
            self.projects.lock().unwrap().insert(0, project.clone());
            Ok(project)
        }

        async fn patch_project(
            &self,
            id: &str,
            data: ProjectPatch,
        ) -> Result<(), ContentRepositoryError> {
            self.check_write()?;
            let mut projects = self.projects.lock().unwrap();
            let project = projects
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(ContentRepositoryError::NotFound)?;
            data.apply_to(project);
            Ok(())
        }

        async fn delete_project(&self, id: &str) -> Result<(), ContentRepositoryError> {
            self.check_write()?;
            self.projects.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }
    }

    #[async_trait]
    impl ExperienceRepository for FakeBackend {
        async fn list_experience(&self) -> Result<Vec<WorkExperience>, ContentRepositoryError> {
            let mut items = self.experience.lock().unwrap().clone();
            items.sort_by_key(|e| e.sort_order);
            Ok(items)
        }

        async fn insert_experience(
            &self,
            data: WorkExperienceDraft,
        ) -> Result<WorkExperience, ContentRepositoryError> {
            self.check_write()?;
            let experience = data.into_experience(self.next_id(), 0);
            self.experience.lock().unwrap().push(experience.clone());
            Ok(experience)
        }

        async fn patch_experience(
            &self,
            id: &str,
            data: WorkExperiencePatch,
        ) -> Result<(), ContentRepositoryError> {
            self.check_write()?;
            let mut items = self.experience.lock().unwrap();
            let experience = items
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or(ContentRepositoryError::NotFound)?;
            data.apply_to(experience);
            Ok(())
        }

        async fn delete_experience(&self, id: &str) -> Result<(), ContentRepositoryError> {
            self.check_write()?;
            self.experience.lock().unwrap().retain(|e| e.id != id);
            Ok(())
        }
    }

    #[async_trait]
    impl ReviewRepository for FakeBackend {
        async fn list_reviews(&self) -> Result<Vec<Review>, ContentRepositoryError> {
            Ok(self.reviews.lock().unwrap().clone())
        }

        async fn insert_review(&self, data: ReviewDraft) -> Result<Review, ContentRepositoryError> {
            self.check_write()?;
            let review = data.into_review(self.next_id());
            self.reviews.lock().unwrap().insert(0, review.clone());
            Ok(review)
        }

        async fn patch_review(
            &self,
            id: &str,
            data: ReviewPatch,
        ) -> Result<(), ContentRepositoryError> {
            self.check_write()?;
            let mut reviews = self.reviews.lock().unwrap();
            let review = reviews
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(ContentRepositoryError::NotFound)?;
            data.apply_to(review);
            Ok(())
        }

        async fn delete_review(&self, id: &str) -> Result<(), ContentRepositoryError> {
            self.check_write()?;
            self.reviews.lock().unwrap().retain(|r| r.id != id);
            Ok(())
        }
    }

    #[async_trait]
    impl MediaRepository for FakeBackend {
        async fn list_media(&self) -> Result<Vec<MediaItem>, ContentRepositoryError> {
            Ok(self.media.lock().unwrap().clone())
        }

        async fn insert_media(&self, data: MediaDraft) -> Result<MediaItem, ContentRepositoryError> {
            self.check_write()?;
            let item = data.into_media_item(self.next_id(), "2024-01-01T00:00:00Z".to_string());
            self.media.lock().unwrap().insert(0, item.clone());
            Ok(item)
        }

        async fn delete_media(&self, id: &str) -> Result<(), ContentRepositoryError> {
            self.check_write()?;
            self.media.lock().unwrap().retain(|m| m.id != id);
            Ok(())
        }
    }

    #[async_trait]
    impl SettingsRepository for FakeBackend {
        async fn get_settings(&self) -> Result<SiteSettings, ContentRepositoryError> {
            Ok(SiteSettings {
                resume_url: self.resume_url.lock().unwrap().clone(),
            })
        }

        async fn set_resume_url(&self, url: &str) -> Result<(), ContentRepositoryError> {
            self.check_write()?;
            *self.resume_url.lock().unwrap() = url.to_string();
            Ok(())
        }
    }

    fn store_over(backend: &Arc<FakeBackend>) -> RemoteContentStore {
        RemoteContentStore::new(ContentRepositories {
            projects: backend.clone(),
            experience: backend.clone(),
            reviews: backend.clone(),
            media: backend.clone(),
            settings: backend.clone(),
        })
    }

    async fn loaded_store() -> (Arc<FakeBackend>, RemoteContentStore) {
        let backend = FakeBackend::seeded();
        let store = store_over(&backend);
        store.load().await;
        (backend, store)
    }

    // =====================================================
    // Load
    // =====================================================

    #[tokio::test]
    async fn test_new_store_is_uninitialized_with_catalog_services() {
        let backend = FakeBackend::seeded();
        let store = store_over(&backend);

        assert_eq!(store.load_state().await, LoadState::Uninitialized);
        assert!(store.load_state().await.is_loading());
        let content = store.snapshot().await;
        assert!(content.projects.is_empty());
        assert_eq!(content.services.len(), 5);
    }

    #[tokio::test]
    async fn test_load_fetches_every_collection() {
        let (_backend, store) = loaded_store().await;
        let content = store.snapshot().await;

        assert_eq!(store.load_state().await, LoadState::Ready);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.work_experience.len(), 3);
        assert_eq!(content.reviews.len(), 3);
        assert_eq!(content.resume_url, "https://cdn/cv.pdf");
    }

    #[tokio::test]
    async fn test_failed_read_settles_ready_and_keeps_other_collections() {
        let backend = FakeBackend::seeded();
        backend.fail_project_reads.store(true, Ordering::SeqCst);
        let store = store_over(&backend);

        store.load().await;

        let content = store.snapshot().await;
        assert_eq!(store.load_state().await, LoadState::Ready);
        assert!(content.projects.is_empty());
        assert_eq!(content.reviews.len(), 3);
    }

    // =====================================================
    // Write then refetch
    // =====================================================

    #[tokio::test]
    async fn test_add_project_uses_backend_id_and_refetches() {
        let (backend, store) = loaded_store().await;
        let reads_before = backend.project_reads.load(Ordering::SeqCst);

        let id = store.add_project(sample_project_draft("X")).await.unwrap();

        assert_eq!(id, "100");
        assert_eq!(backend.project_reads.load(Ordering::SeqCst), reads_before + 1);
        let content = store.snapshot().await;
        assert_eq!(content.projects.len(), 5);
        assert_eq!(content.projects[0].title, "X");
    }

    #[tokio::test]
    async fn test_write_failure_is_returned_and_nothing_changes() {
        let (backend, store) = loaded_store().await;
        let before = store.snapshot().await;
        let reads_before = backend.project_reads.load(Ordering::SeqCst);
        backend.fail_writes.store(true, Ordering::SeqCst);

        let result = store.add_project(sample_project_draft("X")).await;

        assert!(matches!(result, Err(ContentStoreError::WriteFailed(_))));
        assert_eq!(store.snapshot().await, before);
        assert_eq!(backend.project_reads.load(Ordering::SeqCst), reads_before);
    }

    #[tokio::test]
    async fn test_toggle_publish_round_trips_through_backend() {
        let (backend, store) = loaded_store().await;

        store.toggle_publish("4").await.unwrap();

        assert!(store.snapshot().await.project("4").unwrap().is_published);
        assert!(
            backend
                .projects
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == "4")
                .unwrap()
                .is_published
        );
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_a_noop() {
        let (_backend, store) = loaded_store().await;
        let before = store.snapshot().await;

        store
            .update_review(
                "missing",
                ReviewPatch {
                    rating: PatchField::Value(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(store.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_update_review_keeps_untouched_fields() {
        let (_backend, store) = loaded_store().await;

        store
            .update_review(
                "2",
                ReviewPatch {
                    review_text: PatchField::Value("new".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let review = store.snapshot().await.review("2").cloned().unwrap();
        assert_eq!(review.review_text, "new");
        assert_eq!(review.rating, 5);
    }

    #[tokio::test]
    async fn test_add_experience_appends_sort_order() {
        let (_backend, store) = loaded_store().await;

        let id = store
            .add_experience(WorkExperienceDraft {
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                duration: "2014".to_string(),
                contributions: vec![],
                sort_order: None,
            })
            .await
            .unwrap();

        let content = store.snapshot().await;
        assert_eq!(content.work_experience.last().unwrap().id, id);
        assert_eq!(content.experience(&id).unwrap().sort_order, 3);
    }

    #[tokio::test]
    async fn test_delete_review_and_resume_url_persist_remotely() {
        let (backend, store) = loaded_store().await;

        store.delete_review("1").await.unwrap();
        store
            .set_resume_url("https://cdn/new.pdf".to_string())
            .await
            .unwrap();

        let content = store.snapshot().await;
        assert_eq!(content.reviews.len(), 2);
        assert_eq!(content.resume_url, "https://cdn/new.pdf");
        assert_eq!(*backend.resume_url.lock().unwrap(), "https://cdn/new.pdf");
    }

    #[tokio::test]
    async fn test_add_review_reads_back() {
        let (_backend, store) = loaded_store().await;

        let id = store.add_review(sample_review_draft(4)).await.unwrap();

        assert_eq!(store.snapshot().await.review(&id).unwrap().rating, 4);
    }

    // =====================================================
    // In-memory only edits
    // =====================================================

    #[tokio::test]
    async fn test_service_edit_does_not_survive_refresh_of_new_store() {
        let (backend, store) = loaded_store().await;

        store
            .update_service(
                "web",
                ServicePatch {
                    enabled: PatchField::Value(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        store.refresh_data().await.unwrap();
        assert!(!store.snapshot().await.service("web").unwrap().enabled);

        let reloaded = store_over(&backend);
        reloaded.load().await;
        assert!(reloaded.snapshot().await.service("web").unwrap().enabled);
    }

    #[tokio::test]
    async fn test_media_metadata_edit_is_lost_on_refetch() {
        let (backend, store) = loaded_store().await;
        let id = store.add_media(sample_media_draft()).await.unwrap();

        store
            .update_media(
                &id,
                MediaPatch {
                    name: PatchField::Value("renamed.png".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(store.snapshot().await.media_item(&id).unwrap().name, "renamed.png");
        assert_ne!(backend.media.lock().unwrap()[0].name, "renamed.png");

        store.refresh_data().await.unwrap();
        assert_ne!(store.snapshot().await.media_item(&id).unwrap().name, "renamed.png");

        store.delete_media(&id).await.unwrap();
        assert!(store.snapshot().await.media.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_picks_up_external_changes() {
        let (backend, store) = loaded_store().await;
        backend.reviews.lock().unwrap().clear();

        store.refresh_data().await.unwrap();

        assert!(store.snapshot().await.reviews.is_empty());
    }
}
