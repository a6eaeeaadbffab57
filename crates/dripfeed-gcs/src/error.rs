//! Error types for the GCS client.

use thiserror::Error;

/// Errors that can occur when interacting with Google Cloud Storage.
#[derive(Debug, Error)]
pub enum GcsError {
    /// Credential material was invalid or token acquisition failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Object not found in the bucket.
    #[error("object not found: {bucket}/{object}")]
    NotFound { bucket: String, object: String },

    /// GCS rejected the request.
    #[error("GCS error ({status}): {body}")]
    Api { status: u16, body: String },
}
