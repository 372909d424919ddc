use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkContactMessageReadError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MarkContactMessageReadUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), MarkContactMessageReadError>;
}
