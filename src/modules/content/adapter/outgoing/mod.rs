mod experience_repository_postgres;
mod key_value_store_file;
mod key_value_store_memory;
mod media_repository_postgres;
mod project_repository_postgres;
mod review_repository_postgres;
mod row_support;
mod settings_repository_postgres;
pub mod sea_orm_entity;

pub use experience_repository_postgres::ExperienceRepositoryPostgres;
pub use key_value_store_file::FileKeyValueStore;
pub use key_value_store_memory::InMemoryKeyValueStore;
pub use media_repository_postgres::MediaRepositoryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;
pub use review_repository_postgres::ReviewRepositoryPostgres;
pub use settings_repository_postgres::SettingsRepositoryPostgres;
