use actix_web::web;
use std::sync::Arc;

use crate::contact::adapter::outgoing::ContactMessageRepositoryKv;
use crate::contact::application::ContactUseCases;
use crate::content::adapter::outgoing::InMemoryKeyValueStore;
use crate::content::application::domain::defaults::default_content;
use crate::content::application::ports::incoming::ContentStore;
use crate::content::application::service::LocalContentStore;
use crate::multimedia::application::domain::policies::UploadPolicy;
use crate::multimedia::application::MultimediaUseCases;
use crate::AppState;

/// Contact use cases over a fresh in-memory inbox.
pub fn in_memory_contact_use_cases() -> ContactUseCases {
    ContactUseCases::from_repository(ContactMessageRepositoryKv::new(
        InMemoryKeyValueStore::default(),
    ))
}

/// Local store seeded with the bundled content, nothing persisted yet.
pub fn default_content_store() -> Arc<dyn ContentStore> {
    Arc::new(LocalContentStore::with_content(
        InMemoryKeyValueStore::default(),
        default_content(),
    ))
}

pub struct TestAppStateBuilder {
    content: Arc<dyn ContentStore>,
    multimedia: Option<MultimediaUseCases>,
    upload_policy: UploadPolicy,
    contact: ContactUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: default_content_store(),
            multimedia: None,
            upload_policy: UploadPolicy::default(),
            contact: in_memory_contact_use_cases(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_content_store(mut self, store: Arc<dyn ContentStore>) -> Self {
        self.content = store;
        self
    }

    pub fn with_multimedia(mut self, multimedia: MultimediaUseCases) -> Self {
        self.multimedia = Some(multimedia);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn with_contact(mut self, contact: ContactUseCases) -> Self {
        self.contact = contact;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: self.content,
            multimedia: self.multimedia,
            upload_policy: self.upload_policy,
            contact: self.contact,
        })
    }
}
