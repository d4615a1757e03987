use sarovar_core::chat::{ChatRequest, ChatResponse, ChatUsage};
use sarovar_core::types::{Message, Role};
use serde_json::{json, Value};

use crate::error::ConversionError;
use crate::transformer::SchemaTransformer;

/// OpenAI-compatible schema transformer (OpenAI, Groq and similar APIs)
#[derive(Debug, Default)]
pub struct OpenAiTransformer;

impl OpenAiTransformer {
    pub fn new() -> Self {
        Self
    }

    fn convert_message(&self, msg: &Message) -> Value {
        json!({
            "role": msg.role.to_string(),
            "content": msg.content,
        })
    }
}

impl SchemaTransformer for OpenAiTransformer {
    fn transform_request(&self, request: &ChatRequest) -> Result<Value, ConversionError> {
        let messages: Vec<Value> = request
            .messages
            .iter()
            .map(|m| self.convert_message(m))
            .collect();

        let mut body = json!({
            "model": request.model,
            "messages": messages,
        });

        if let Some(temp) = request.options.temperature {
            body["temperature"] = json!(temp);
        }

        if let Some(max_tokens) = request.options.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        Ok(body)
    }

    fn parse_response(&self, data: &Value) -> Result<ChatResponse, ConversionError> {
        let id = data["id"].as_str().unwrap_or_default().to_string();
        let model = data["model"].as_str().unwrap_or_default().to_string();

        let choice = data["choices"]
            .get(0)
            .ok_or_else(|| ConversionError::MissingField("choices".to_string()))?;

        let message_data = &choice["message"];
        let role = match message_data["role"].as_str() {
            Some("system") => Role::System,
            Some("user") => Role::User,
            _ => Role::Assistant,
        };

        let content = message_data["content"]
            .as_str()
            .unwrap_or_default()
            .to_string();

        let usage = &data["usage"];
        let usage = ChatUsage::new(
            token_count(&usage["prompt_tokens"]),
            token_count(&usage["completion_tokens"]),
        );

        Ok(ChatResponse::new(id, model, Message { role, content }).with_usage(usage))
    }
}

/// Missing counts read as 0, oversized ones clamp to `u32::MAX`
fn token_count(value: &Value) -> u32 {
    value
        .as_u64()
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        .unwrap_or(0)
}
