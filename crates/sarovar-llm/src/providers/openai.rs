use async_trait::async_trait;
use sarovar_core::chat::{ChatRequest, ChatResponse};

use crate::error::Result;
use crate::provider::{BaseProvider, LLMProvider, ProviderConfig};
use crate::transformer::OpenAiTransformer;

/// Provider for OpenAI-compatible `/chat/completions` endpoints (OpenAI, Groq)
pub struct OpenAiProvider {
    base: BaseProvider<OpenAiTransformer>,
}

impl OpenAiProvider {
    pub fn with_config(config: ProviderConfig) -> Result<Self> {
        let base = BaseProvider::new(config, OpenAiTransformer::new())?;
        Ok(Self { base })
    }
}

#[async_trait]
impl LLMProvider for OpenAiProvider {
    fn provider_id(&self) -> &str {
        self.base.provider_id()
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.base.send_request(request).await
    }
}
