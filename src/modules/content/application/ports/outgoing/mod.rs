pub mod content_repository;
pub mod key_value_store;

pub use content_repository::{
    ContentRepositories, ContentRepositoryError, ExperienceRepository, MediaRepository,
    ProjectRepository, ReviewRepository, SettingsRepository,
};
pub use key_value_store::{KeyValueStore, KeyValueStoreError};
