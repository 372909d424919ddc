use async_trait::async_trait;

use crate::multimedia::application::{
    domain::policies::{UploadPolicy, UploadPolicyError},
    ports::outgoing::cloud_storage::BlobStorageError,
};

/// A validated upload request. The object name is derived later so every
/// attempt gets a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadMediaCommand {
    bucket: String,
    folder: Option<String>,
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl UploadMediaCommand {
    pub fn try_new(
        bucket: String,
        folder: Option<String>,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
        policy: &UploadPolicy,
    ) -> Result<Self, UploadPolicyError> {
        policy.validate_bucket(&bucket)?;
        let folder = policy.normalize_folder(folder.as_deref())?;
        policy.extension(&file_name)?;
        policy.validate_size(bytes.len() as u64)?;

        let content_type = match content_type.trim() {
            "" => "application/octet-stream".to_string(),
            other => other.to_string(),
        };

        Ok(Self {
            bucket,
            folder,
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedMedia {
    pub url: String,
    pub path: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum UploadMediaError {
    #[error("Invalid upload: {0}")]
    InvalidUpload(#[from] UploadPolicyError),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<BlobStorageError> for UploadMediaError {
    fn from(e: BlobStorageError) -> Self {
        UploadMediaError::StorageError(e.to_string())
    }
}

#[async_trait]
pub trait UploadMediaUseCase: Send + Sync {
    async fn execute(&self, command: UploadMediaCommand) -> Result<UploadedMedia, UploadMediaError>;
}
