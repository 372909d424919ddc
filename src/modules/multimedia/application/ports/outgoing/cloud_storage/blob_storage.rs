use async_trait::async_trait;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BlobStorageError {
    #[error("Storage rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Access denied")]
    AccessDenied,

    #[error("Storage unreachable: {0}")]
    Transport(String),
}

// ============================================================================
// Port
// ============================================================================

/// Object storage addressed by bucket and object path.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Stores `bytes` under `path`. An existing object is never overwritten.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobStorageError>;

    async fn delete(&self, bucket: &str, paths: &[String]) -> Result<(), BlobStorageError>;

    /// Public URL of an object. Pure string building, no I/O.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}
