use async_trait::async_trait;
use sarovar_core::chat::{ChatRequest, ChatResponse};
use sarovar_core::types::{Message, Role};
use sarovar_llm::{LLMError, LLMProvider};
use std::sync::Mutex;

/// Mock LLM provider that records requests and replays a fixed answer
pub struct MockLLMProvider {
    reply: Option<String>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockLLMProvider {
    pub fn with_text_response(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            ..Self::with_text_response("")
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMProvider for MockLLMProvider {
    fn provider_id(&self) -> &str {
        "mock"
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LLMError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Some(text) => Ok(ChatResponse::new(
                "mock-123",
                "mock-model",
                Message::assistant(text.as_str()),
            )),
            None => Err(LLMError::Network("connection refused".to_string())),
        }
    }
}

#[tokio::test]
async fn test_mock_provider_text_response() {
    let mock = MockLLMProvider::with_text_response("Open 11AM-10PM daily.");
    let request = ChatRequest::new("mock-model")
        .with_message(Message::system("You are Dexter"))
        .with_message(Message::user("when are you open?"));

    let response = mock.chat(request).await.unwrap();

    assert_eq!(response.text(), "Open 11AM-10PM daily.");
    assert_eq!(response.message.role, Role::Assistant);
    let recorded = mock.requests();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].messages[1].content, "when are you open?");
}

#[tokio::test]
async fn test_mock_provider_as_trait_object() {
    let provider: Box<dyn LLMProvider> = Box::new(MockLLMProvider::failing());
    assert_eq!(provider.provider_id(), "mock");
    let err = provider.chat(ChatRequest::new("m")).await.unwrap_err();
    assert!(matches!(err, LLMError::Network(_)));
}
