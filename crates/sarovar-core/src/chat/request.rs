use crate::types::Message;

/// Chat completion request
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub options: ChatOptions,
}

impl ChatRequest {
    /// Create a new chat request
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            options: ChatOptions::default(),
        }
    }

    /// Add a message to the request
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Add multiple messages
    pub fn with_messages(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Set temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.options.temperature = Some(temp);
        self
    }

    /// Set max tokens
    pub fn max_tokens(mut self, max: u32) -> Self {
        self.options.max_tokens = Some(max);
        self
    }
}

/// Sampling options for chat completion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_builder() {
        let request = ChatRequest::new("llama-3.1-8b-instant")
            .with_message(Message::system("You are Dexter"))
            .with_messages(vec![Message::user("hi"), Message::assistant("Hello!")])
            .temperature(0.7)
            .max_tokens(150);

        assert_eq!(request.model, "llama-3.1-8b-instant");
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.options.temperature, Some(0.7));
        assert_eq!(request.options.max_tokens, Some(150));
    }
}
