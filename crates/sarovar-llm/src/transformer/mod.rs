pub mod openai;

pub use openai::OpenAiTransformer;

use sarovar_core::chat::{ChatRequest, ChatResponse};
use serde_json::Value;

use crate::error::ConversionError;

/// Converts between the internal chat types and a provider wire format
pub trait SchemaTransformer: Send + Sync {
    fn transform_request(&self, request: &ChatRequest) -> Result<Value, ConversionError>;

    fn parse_response(&self, data: &Value) -> Result<ChatResponse, ConversionError>;
}
