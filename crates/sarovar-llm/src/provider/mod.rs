pub mod base;
pub mod config;

pub use base::BaseProvider;
pub use config::{AuthConfig, ProviderConfig};

use async_trait::async_trait;
use sarovar_core::chat::{ChatRequest, ChatResponse};

use crate::error::Result;

/// A chat completion backend
#[async_trait]
pub trait LLMProvider: Send + Sync {
    fn provider_id(&self) -> &str;

    /// Send a chat request and wait for the complete response
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;
}
