use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::ports::{
    incoming::use_cases::{MarkContactMessageReadError, MarkContactMessageReadUseCase},
    outgoing::{ContactMessageRepository, ContactMessageRepositoryError},
};

#[derive(Debug, Clone)]
pub struct MarkContactMessageReadService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> MarkContactMessageReadService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkContactMessageReadUseCase for MarkContactMessageReadService<R>
where
    R: ContactMessageRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), MarkContactMessageReadError> {
        self.repository.mark_read(id).await.map_err(|e| match e {
            ContactMessageRepositoryError::NotFound => MarkContactMessageReadError::NotFound,
            other => MarkContactMessageReadError::RepositoryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::adapter::outgoing::ContactMessageRepositoryKv;
    use crate::contact::application::ports::incoming::use_cases::SubmitContactMessageCommand;
    use crate::content::adapter::outgoing::InMemoryKeyValueStore;

    #[tokio::test]
    async fn test_mark_read_unknown_message_is_not_found() {
        let repo = ContactMessageRepositoryKv::new(InMemoryKeyValueStore::default());
        let service = MarkContactMessageReadService::new(repo);

        assert_eq!(
            service.execute(Uuid::new_v4()).await,
            Err(MarkContactMessageReadError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_mark_read_flags_stored_message() {
        let repo = ContactMessageRepositoryKv::new(InMemoryKeyValueStore::default());
        let stored = repo
            .insert_message(
                SubmitContactMessageCommand::new(
                    "Ada".to_string(),
                    "ada@example.com".to_string(),
                    None,
                    "Hello".to_string(),
                )
                .unwrap()
                .into_new_message(),
            )
            .await
            .unwrap();

        let service = MarkContactMessageReadService::new(repo.clone());
        service.execute(stored.id).await.unwrap();

        let messages = repo.list_messages().await.unwrap();
        assert!(messages[0].is_read);
    }
}
