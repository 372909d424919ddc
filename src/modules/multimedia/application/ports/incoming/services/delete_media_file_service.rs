use async_trait::async_trait;
use tracing::{debug, warn};

use crate::multimedia::application::{
    domain::policies::object_path_from_public_url,
    ports::{incoming::use_cases::DeleteMediaFileUseCase, outgoing::cloud_storage::BlobStorage},
};

pub struct DeleteMediaFileService<S>
where
    S: BlobStorage,
{
    storage: S,
}

impl<S> DeleteMediaFileService<S>
where
    S: BlobStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> DeleteMediaFileUseCase for DeleteMediaFileService<S>
where
    S: BlobStorage,
{
    async fn execute(&self, bucket: &str, public_url: &str) {
        let Some(path) = object_path_from_public_url(public_url, bucket) else {
            debug!(bucket, public_url, "URL is not in bucket, nothing to delete");
            return;
        };

        if let Err(e) = self.storage.delete(bucket, &[path.clone()]).await {
            warn!(bucket, path = %path, error = %e, "Failed to delete media object");
        }
    }
}
