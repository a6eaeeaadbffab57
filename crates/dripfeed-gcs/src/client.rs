//! Minimal client for the GCS JSON API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use tracing::debug;

use crate::{GcsError, TokenProvider};

/// Production endpoint for the GCS JSON API.
const GCS_BASE_URL: &str = "https://storage.googleapis.com";

/// Client for downloading and uploading objects in a single bucket.
pub struct GcsClient {
    http: Client,
    base_url: String,
    bucket: String,
    token: Arc<dyn TokenProvider>,
}

impl GcsClient {
    /// Create a client against the production GCS endpoint.
    pub fn new(bucket: impl Into<String>, token: Arc<dyn TokenProvider>) -> Self {
        Self::with_base_url(GCS_BASE_URL, bucket, token)
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_base_url(
        base_url: impl Into<String>,
        bucket: impl Into<String>,
        token: Arc<dyn TokenProvider>,
    ) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
            bucket: bucket.into(),
            token,
        }
    }

    /// Bucket this client reads and writes.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Download an object's content.
    ///
    /// A missing object is [`GcsError::NotFound`]; any other non-success
    /// response carries the status and body back to the caller.
    pub async fn download(&self, object: &str) -> Result<Vec<u8>, GcsError> {
        let token = self.token.token().await?;
        let url = format!("{}/storage/v1/b/{}/o/{}", self.base_url, self.bucket, object);
        debug!(bucket = %self.bucket, object, "downloading object");

        let response = self
            .http
            .get(&url)
            .query(&[("alt", "media")])
            .bearer_auth(&token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.bytes().await?.to_vec()),
            StatusCode::NOT_FOUND => Err(GcsError::NotFound {
                bucket: self.bucket.clone(),
                object: object.to_string(),
            }),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(GcsError::Api {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// Download an object, treating a missing object as `None`.
    pub async fn download_if_exists(&self, object: &str) -> Result<Option<Vec<u8>>, GcsError> {
        match self.download(object).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(GcsError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Upload (create or overwrite) an object via a media upload.
    pub async fn upload(
        &self,
        object: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), GcsError> {
        let token = self.token.token().await?;
        let url = format!("{}/upload/storage/v1/b/{}/o", self.base_url, self.bucket);
        debug!(bucket = %self.bucket, object, bytes = body.len(), "uploading object");

        let response = self
            .http
            .post(&url)
            .query(&[("uploadType", "media"), ("name", object)])
            .bearer_auth(&token)
            .header(header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GcsError::Api { status, body });
        }

        Ok(())
    }
}
