use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::multimedia::application::ports::outgoing::cloud_storage::{
    BlobStorage, BlobStorageError,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn object_endpoint(base_url: &str, bucket: &str, path: &str) -> String {
    format!("{base_url}/storage/v1/object/{bucket}/{path}")
}

fn bucket_endpoint(base_url: &str, bucket: &str) -> String {
    format!("{base_url}/storage/v1/object/{bucket}")
}

fn map_status(status: StatusCode, body: String) -> BlobStorageError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BlobStorageError::AccessDenied,
        other => BlobStorageError::Rejected {
            status: other.as_u16(),
            message: body,
        },
    }
}

fn map_transport(e: reqwest::Error) -> BlobStorageError {
    BlobStorageError::Transport(e.to_string())
}

/// Hosted storage REST API authenticated with a service key.
#[derive(Clone)]
pub struct HttpBlobStorage {
    client: Client,
    base_url: String,
    service_key: String,
    cache_control_seconds: u32,
}

impl HttpBlobStorage {
    pub fn new(
        base_url: impl Into<String>,
        service_key: impl Into<String>,
        cache_control_seconds: u32,
    ) -> Result<Self, BlobStorageError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(map_transport)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
            cache_control_seconds,
        })
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(header::AUTHORIZATION, format!("Bearer {}", self.service_key))
            .header("apikey", &self.service_key)
    }

    async fn check(response: reqwest::Response) -> Result<(), BlobStorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_status(status, body))
    }
}

#[async_trait]
impl BlobStorage for HttpBlobStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobStorageError> {
        let url = object_endpoint(&self.base_url, bucket, path);
        debug!(url = %url, size = bytes.len(), "Uploading object");

        let response = self
            .authorized(self.client.post(&url))
            .header(header::CONTENT_TYPE, content_type)
            .header(
                header::CACHE_CONTROL,
                format!("max-age={}", self.cache_control_seconds),
            )
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(map_transport)?;

        Self::check(response).await
    }

    async fn delete(&self, bucket: &str, paths: &[String]) -> Result<(), BlobStorageError> {
        let url = bucket_endpoint(&self.base_url, bucket);
        let body = json!({ "prefixes": paths }).to_string();

        let response = self
            .authorized(self.client.delete(&url))
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_transport)?;

        Self::check(response).await
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{path}", self.base_url)
    }
}
