use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::multimedia::application::{
    domain::policies::UploadPolicy,
    ports::{
        incoming::use_cases::{
            UploadMediaCommand, UploadMediaError, UploadMediaUseCase, UploadedMedia,
        },
        outgoing::cloud_storage::BlobStorage,
    },
};

pub struct UploadMediaService<S>
where
    S: BlobStorage,
{
    storage: S,
    policy: UploadPolicy,
}

impl<S> UploadMediaService<S>
where
    S: BlobStorage,
{
    pub fn new(storage: S, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }
}

#[async_trait]
impl<S> UploadMediaUseCase for UploadMediaService<S>
where
    S: BlobStorage,
{
    async fn execute(&self, command: UploadMediaCommand) -> Result<UploadedMedia, UploadMediaError> {
        let path = self.policy.object_name(
            command.folder(),
            command.file_name(),
            Utc::now().timestamp_millis(),
        )?;
        let bucket = command.bucket().to_string();
        let content_type = command.content_type().to_string();
        let size = command.size();

        self.storage
            .upload(&bucket, &path, command.into_bytes(), &content_type)
            .await?;

        info!(bucket = %bucket, path = %path, size, "Uploaded media object");

        Ok(UploadedMedia {
            url: self.storage.public_url(&bucket, &path),
            path,
        })
    }
}
