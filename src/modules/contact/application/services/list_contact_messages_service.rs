use async_trait::async_trait;

use crate::contact::application::{
    domain::entities::ContactMessage,
    ports::{
        incoming::use_cases::{ListContactMessagesError, ListContactMessagesUseCase},
        outgoing::ContactMessageRepository,
    },
};

#[derive(Debug, Clone)]
pub struct ListContactMessagesService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> ListContactMessagesService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListContactMessagesUseCase for ListContactMessagesService<R>
where
    R: ContactMessageRepository,
{
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListContactMessagesError> {
        self.repository
            .list_messages()
            .await
            .map_err(|e| ListContactMessagesError::RepositoryError(e.to_string()))
    }
}
