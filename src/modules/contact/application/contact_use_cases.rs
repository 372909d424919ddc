use std::sync::Arc;

use crate::contact::application::ports::incoming::use_cases::{
    ListContactMessagesUseCase, MarkContactMessageReadUseCase, SubmitContactMessageUseCase,
};
use crate::contact::application::ports::outgoing::ContactMessageRepository;
use crate::contact::application::services::{
    ListContactMessagesService, MarkContactMessageReadService, SubmitContactMessageService,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub list: Arc<dyn ListContactMessagesUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkContactMessageReadUseCase + Send + Sync>,
}

impl ContactUseCases {
    /// Every use case backed by the same inbox.
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: ContactMessageRepository + Clone + 'static,
    {
        Self {
            submit: Arc::new(SubmitContactMessageService::new(repository.clone())),
            list: Arc::new(ListContactMessagesService::new(repository.clone())),
            mark_read: Arc::new(MarkContactMessageReadService::new(repository)),
        }
    }
}
