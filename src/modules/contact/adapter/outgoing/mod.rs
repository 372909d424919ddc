mod contact_message_repository_kv;
mod contact_message_repository_postgres;
pub mod sea_orm_entity;

pub use contact_message_repository_kv::{ContactMessageRepositoryKv, CONTACT_MESSAGES_KEY};
pub use contact_message_repository_postgres::ContactMessageRepositoryPostgres;
