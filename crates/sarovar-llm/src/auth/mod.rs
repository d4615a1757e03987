use async_trait::async_trait;

use crate::error::Result;

/// Supplies the authentication header for outgoing requests
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// `(header_name, header_value)`, or `None` when no header is needed
    async fn get_auth_header(&self) -> Result<Option<(String, String)>>;
}

/// Bearer API key authenticator
#[derive(Clone)]
pub struct ApiKeyAuth {
    api_key: String,
}

impl ApiKeyAuth {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth").field("api_key", &"***").finish()
    }
}

#[async_trait]
impl Authenticator for ApiKeyAuth {
    async fn get_auth_header(&self) -> Result<Option<(String, String)>> {
        Ok(Some((
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )))
    }
}

/// No authentication
#[derive(Debug, Clone)]
pub struct NoAuth;

#[async_trait]
impl Authenticator for NoAuth {
    async fn get_auth_header(&self) -> Result<Option<(String, String)>> {
        Ok(None)
    }
}
