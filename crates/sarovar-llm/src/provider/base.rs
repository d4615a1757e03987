use reqwest::{header, Client};
use sarovar_core::chat::{ChatRequest, ChatResponse};
use std::sync::Arc;

use crate::auth::{ApiKeyAuth, Authenticator, NoAuth};
use crate::error::{LLMError, Result};
use crate::provider::{AuthConfig, ProviderConfig};
use crate::transformer::SchemaTransformer;

/// Shared HTTP plumbing; schema conversion is delegated to the transformer.
/// Requests are sent once, failures are returned to the caller.
pub struct BaseProvider<T: SchemaTransformer> {
    config: ProviderConfig,
    http_client: Client,
    transformer: Arc<T>,
    authenticator: Arc<dyn Authenticator>,
}

impl<T: SchemaTransformer + 'static> BaseProvider<T> {
    pub fn new(config: ProviderConfig, transformer: T) -> Result<Self> {
        let authenticator: Arc<dyn Authenticator> = match &config.auth {
            AuthConfig::ApiKey { key } => Arc::new(ApiKeyAuth::new(key.clone())),
            AuthConfig::None => Arc::new(NoAuth),
        };
        Self::with_authenticator(config, transformer, authenticator)
    }

    pub fn with_authenticator(
        config: ProviderConfig,
        transformer: T,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LLMError::Config(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
            transformer: Arc::new(transformer),
            authenticator,
        })
    }

    pub fn provider_id(&self) -> &str {
        &self.config.provider_id
    }

    async fn build_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        if let Some((header_name, header_value)) = self.authenticator.get_auth_header().await? {
            let name = header::HeaderName::from_bytes(header_name.as_bytes())
                .map_err(|e| LLMError::Config(format!("Invalid auth header name: {}", e)))?;
            let value = header::HeaderValue::from_str(&header_value)
                .map_err(|e| LLMError::Config(format!("Invalid auth header value: {}", e)))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    /// POST to `{base_url}/chat/completions` and parse the reply
    pub async fn send_request(&self, mut request: ChatRequest) -> Result<ChatResponse> {
        if request.model.is_empty() {
            request.model = self.config.model.clone();
        }

        let body = self.transformer.transform_request(&request)?;
        let headers = self.build_headers().await?;
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        log::debug!(
            "[{}] POST {} with {} messages",
            self.provider_id(),
            url,
            request.messages.len()
        );

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                401 | 403 => LLMError::Auth(error_text),
                429 => LLMError::RateLimited,
                _ => LLMError::Api {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let response_data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;

        Ok(self.transformer.parse_response(&response_data)?)
    }
}
