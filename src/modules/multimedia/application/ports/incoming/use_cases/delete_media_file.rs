use async_trait::async_trait;

/// Removes a previously uploaded object given its public URL.
///
/// Best effort: URLs outside the bucket are ignored and storage failures are
/// logged, never returned.
#[async_trait]
pub trait DeleteMediaFileUseCase: Send + Sync {
    async fn execute(&self, bucket: &str, public_url: &str);
}
