use async_trait::async_trait;
use tracing::info;

use crate::contact::application::{
    domain::entities::ContactMessage,
    ports::{
        incoming::use_cases::{
            SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
        },
        outgoing::ContactMessageRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SubmitContactMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> SubmitContactMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactMessageUseCase for SubmitContactMessageService<R>
where
    R: ContactMessageRepository,
{
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactMessage, SubmitContactMessageError> {
        let stored = self
            .repository
            .insert_message(command.into_new_message())
            .await
            .map_err(|e| SubmitContactMessageError::RepositoryError(e.to_string()))?;

        info!(
            message_id = %stored.id,
            project_type = %stored.project_type,
            "Contact message received"
        );

        Ok(stored)
    }
}
