use crate::types::Message;

/// Chat completion response
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub id: String,
    pub model: String,
    pub message: Message,
    pub usage: ChatUsage,
}

impl ChatResponse {
    /// Create a new response
    pub fn new(id: impl Into<String>, model: impl Into<String>, message: Message) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            message,
            usage: ChatUsage::default(),
        }
    }

    /// Set usage
    pub fn with_usage(mut self, usage: ChatUsage) -> Self {
        self.usage = usage;
        self
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        self.message.text()
    }
}

/// Token usage information
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

impl ChatUsage {
    /// The total saturates at `u32::MAX`
    pub fn new(input: u32, output: u32) -> Self {
        Self {
            input_tokens: input,
            output_tokens: output,
            total_tokens: input.saturating_add(output),
        }
    }
}
