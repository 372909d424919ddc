use async_trait::async_trait;
use email_address::EmailAddress;

use crate::contact::application::domain::entities::{
    ContactMessage, NewContactMessage, DEFAULT_PROJECT_TYPE,
};

//
// ──────────────────────────────────────────────────────────
// Submit Contact Message Command
// ──────────────────────────────────────────────────────────
//

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitContactMessageCommand {
    message: NewContactMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactMessageCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message too long")]
    MessageTooLong,
}

impl SubmitContactMessageCommand {
    pub fn new(
        name: String,
        email: String,
        project_type: Option<String>,
        message: String,
    ) -> Result<Self, SubmitContactMessageCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SubmitContactMessageCommandError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(SubmitContactMessageCommandError::NameTooLong);
        }

        let email = email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(SubmitContactMessageCommandError::InvalidEmail);
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(SubmitContactMessageCommandError::EmptyMessage);
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(SubmitContactMessageCommandError::MessageTooLong);
        }

        let project_type = project_type
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_PROJECT_TYPE.to_string());

        Ok(Self {
            message: NewContactMessage {
                name: name.to_string(),
                email: email.to_string(),
                project_type,
                message: message.to_string(),
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.message.name
    }

    pub fn email(&self) -> &str {
        &self.message.email
    }

    pub fn project_type(&self) -> &str {
        &self.message.project_type
    }

    pub fn into_new_message(self) -> NewContactMessage {
        self.message
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactMessage, SubmitContactMessageError>;
}
