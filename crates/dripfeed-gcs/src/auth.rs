//! Token acquisition for storage requests.

use async_trait::async_trait;
use yup_oauth2::authenticator::DefaultAuthenticator;

use crate::GcsError;

/// OAuth scope needed to read and write bucket objects.
const STORAGE_SCOPE: &[&str] = &["https://www.googleapis.com/auth/devstorage.read_write"];

/// Source of Bearer tokens for storage requests.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return a currently valid access token.
    async fn token(&self) -> Result<String, GcsError>;
}

/// Token provider backed by a Google service-account key.
///
/// The key JSON is handed over in memory. Nothing is written to disk and no
/// process-global environment variable is touched.
pub struct ServiceAccountTokenProvider {
    auth: DefaultAuthenticator,
}

impl ServiceAccountTokenProvider {
    /// Build an authenticator from the service-account key JSON itself
    /// (not a path to it).
    pub async fn from_key_json(key_json: &str) -> Result<Self, GcsError> {
        let key = yup_oauth2::parse_service_account_key(key_json)
            .map_err(|e| GcsError::Auth(format!("invalid service account key: {}", e)))?;

        let auth = yup_oauth2::ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|e| GcsError::Auth(format!("failed to build authenticator: {}", e)))?;

        Ok(Self { auth })
    }
}

#[async_trait]
impl TokenProvider for ServiceAccountTokenProvider {
    async fn token(&self) -> Result<String, GcsError> {
        let token = self
            .auth
            .token(STORAGE_SCOPE)
            .await
            .map_err(|e| GcsError::Auth(e.to_string()))?;

        token
            .token()
            .map(str::to_owned)
            .ok_or_else(|| GcsError::Auth("authenticator returned no access token".to_string()))
    }
}

/// Fixed-token provider, for tests and pre-issued credentials.
pub struct StaticTokenProvider(String);

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<String, GcsError> {
        Ok(self.0.clone())
    }
}
