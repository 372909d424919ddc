use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const DEFAULT_PROJECT_TYPE: &str = "Web Application";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
    pub is_read: bool,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// A validated submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

impl NewContactMessage {
    pub fn into_message(self, id: Uuid, created_at: String) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            project_type: self.project_type,
            message: self.message,
            is_read: false,
            created_at,
        }
    }
}
