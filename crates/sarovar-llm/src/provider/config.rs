use std::time::Duration;

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// Bearer API key (OpenAI and Groq style)
    ApiKey { key: String },
    /// No authentication
    #[default]
    None,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::ApiKey { .. } => f.write_str("ApiKey { key: *** }"),
            AuthConfig::None => f.write_str("None"),
        }
    }
}

/// Provider configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider_id: String,
    /// Base URL, `/chat/completions` is appended
    pub base_url: String,
    pub auth: AuthConfig,
    /// Default model
    pub model: String,
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn new(provider_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.auth = AuthConfig::ApiKey { key: key.into() };
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_id: "groq".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            auth: AuthConfig::None,
            model: "llama-3.1-8b-instant".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
