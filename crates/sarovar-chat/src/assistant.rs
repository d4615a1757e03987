use std::sync::Arc;

use sarovar_core::{ChatRequest, Message};
use sarovar_llm::LLMProvider;
use tracing::{debug, warn};

/// Persona, brevity rules and the restaurant facts the model may use
pub const SYSTEM_PROMPT: &str = "You are Dexter, AI assistant for Sarovar South Spice restaurant.

RULES:
1. Keep responses to 1-2 sentences MAX. Be concise.
2. No markdown, no asterisks, no bullet points. Plain text only.
3. Be warm but brief. No filler words or unnecessary pleasantries.
4. For bookings, say: use the booking form in the chat.
5. Never invent info not listed below.

RESTAURANT: 123 Flavor Street, Thanjavur | 11AM-10PM daily | 040-23456789 | \
contact@sarovarsouthspice.com | Free parking, valet weekends | Free WiFi | Est. 2023";

/// Sampling and context settings for the completion call
#[derive(Debug, Clone, PartialEq)]
pub struct LlmAssistantConfig {
    /// Empty means the provider's default model
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Trailing history entries sent with each message
    pub history_window: usize,
}

impl Default for LlmAssistantConfig {
    fn default() -> Self {
        Self {
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.7,
            max_tokens: 150,
            history_window: 6,
        }
    }
}

/// Best-effort completion call.
///
/// Without a provider every call answers `None`. Provider errors are logged
/// and swallowed; the caller falls back to rule-based replies.
#[derive(Clone, Default)]
pub struct LlmAssistant {
    provider: Option<Arc<dyn LLMProvider>>,
    config: LlmAssistantConfig,
}

impl LlmAssistant {
    pub fn new(provider: Arc<dyn LLMProvider>, config: LlmAssistantConfig) -> Self {
        Self {
            provider: Some(provider),
            config,
        }
    }

    /// An assistant that never answers
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// System prompt, the last `history_window` history entries, then the message
    pub fn build_request(&self, message: &str, history: &[Message]) -> ChatRequest {
        let skip = history.len().saturating_sub(self.config.history_window);

        ChatRequest::new(self.config.model.as_str())
            .with_message(Message::system(SYSTEM_PROMPT))
            .with_messages(history[skip..].iter().cloned())
            .with_message(Message::user(message))
            .temperature(self.config.temperature)
            .max_tokens(self.config.max_tokens)
    }

    pub async fn complete(&self, message: &str, history: &[Message]) -> Option<String> {
        let provider = self.provider.as_ref()?;
        let request = self.build_request(message, history);

        match provider.chat(request).await {
            Ok(response) => {
                debug!(
                    provider = provider.provider_id(),
                    model = %response.model,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    total_tokens = response.usage.total_tokens,
                    "completion received"
                );
                if response.text().trim().is_empty() {
                    debug!("[{}] empty completion", provider.provider_id());
                    None
                } else {
                    Some(response.message.content)
                }
            }
            Err(e) => {
                warn!("[{}] completion failed: {}", provider.provider_id(), e);
                None
            }
        }
    }
}

impl std::fmt::Debug for LlmAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmAssistant")
            .field(
                "provider",
                &self.provider.as_ref().map(|p| p.provider_id().to_string()),
            )
            .field("config", &self.config)
            .finish()
    }
}
