use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::domain::entities::{ContactMessage, NewContactMessage};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert_message(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError>;

    /// Newest first.
    async fn list_messages(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError>;

    async fn mark_read(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError>;
}
