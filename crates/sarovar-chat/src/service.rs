use std::sync::Arc;

use sarovar_core::Intent;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::assistant::LlmAssistant;
use crate::classifier::KeywordClassifier;
use crate::history::HistoryStore;
use crate::rate_limit::RateLimiter;
use crate::responses::{ResponseTable, GENERIC_REPLY};
use crate::strategy::{
    DefaultsStrategy, GenericStrategy, LlmStrategy, ReplyContext, ResponseStrategy,
    TemplateStrategy,
};

pub const EMPTY_MESSAGE_REPLY: &str = "Please type a message.";
pub const RATE_LIMITED_REPLY: &str = "You're sending messages too fast. Please wait a moment.";

/// Body of a `/chat` reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub intent: Intent,
}

impl ChatReply {
    pub fn new(response: impl Into<String>, intent: Intent) -> Self {
        Self {
            response: response.into(),
            intent,
        }
    }
}

/// Reply plus the session it was produced for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOutcome {
    /// `None` only when the message was rejected before a session was needed
    pub session_id: Option<String>,
    /// Whether `session_id` was minted by this call
    pub new_session: bool,
    pub reply: ChatReply,
}

/// Runs a chat turn: rate limit, classify, reply through the strategy chain,
/// record history.
pub struct ChatService {
    limiter: Arc<RateLimiter>,
    history: Arc<HistoryStore>,
    classifier: KeywordClassifier,
    strategies: Vec<Box<dyn ResponseStrategy>>,
}

impl ChatService {
    /// The standard chain: LLM, response table, defaults, generic reply
    pub fn new(
        limiter: Arc<RateLimiter>,
        history: Arc<HistoryStore>,
        assistant: LlmAssistant,
        table: Arc<ResponseTable>,
    ) -> Self {
        let strategies: Vec<Box<dyn ResponseStrategy>> = vec![
            Box::new(LlmStrategy::new(assistant)),
            Box::new(TemplateStrategy::new(table)),
            Box::new(DefaultsStrategy),
            Box::new(GenericStrategy),
        ];
        Self::with_strategies(limiter, history, strategies)
    }

    pub fn with_strategies(
        limiter: Arc<RateLimiter>,
        history: Arc<HistoryStore>,
        strategies: Vec<Box<dyn ResponseStrategy>>,
    ) -> Self {
        Self {
            limiter,
            history,
            classifier: KeywordClassifier::new(),
            strategies,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub async fn handle(&self, session_id: Option<&str>, message: &str) -> ChatOutcome {
        let message = message.trim();
        if message.is_empty() {
            return ChatOutcome {
                session_id: session_id.map(str::to_string),
                new_session: false,
                reply: ChatReply::new(EMPTY_MESSAGE_REPLY, Intent::Fallback),
            };
        }

        let (session_id, new_session) = match session_id.filter(|id| !id.is_empty()) {
            Some(id) => (id.to_string(), false),
            None => (Uuid::new_v4().to_string(), true),
        };
        self.history.ensure(&session_id);
        if new_session {
            info!(
                session_id = %session_id,
                sessions = self.history.session_count(),
                rate_tracked = self.limiter.tracked_sessions(),
                "new chat session"
            );
        }

        if !self.limiter.check(&session_id) {
            return ChatOutcome {
                session_id: Some(session_id),
                new_session,
                reply: ChatReply::new(RATE_LIMITED_REPLY, Intent::Fallback),
            };
        }

        let intent = self.classifier.classify(message);
        let history = self.history.get(&session_id);
        let ctx = ReplyContext {
            message,
            intent,
            history: &history,
        };

        let response = self.reply(&ctx).await;
        self.history.record_turn(&session_id, message, &response);

        ChatOutcome {
            session_id: Some(session_id),
            new_session,
            reply: ChatReply::new(response, intent),
        }
    }

    async fn reply(&self, ctx: &ReplyContext<'_>) -> String {
        for strategy in &self.strategies {
            if let Some(text) = strategy.respond(ctx).await {
                debug!(intent = %ctx.intent, strategy = strategy.name(), "reply resolved");
                return text;
            }
        }
        GENERIC_REPLY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_limit::RateLimitConfig;
    use std::time::Duration;

    fn service(limit: usize) -> ChatService {
        ChatService::new(
            Arc::new(RateLimiter::new(RateLimitConfig::new(
                limit,
                Duration::from_secs(60),
            ))),
            Arc::new(HistoryStore::new(20)),
            LlmAssistant::disabled(),
            Arc::new(ResponseTable::new()),
        )
    }

    #[tokio::test]
    async fn test_empty_message_short_circuits() {
        let service = service(20);
        let outcome = service.handle(None, "   \n").await;

        assert_eq!(outcome.reply, ChatReply::new(EMPTY_MESSAGE_REPLY, Intent::Fallback));
        assert_eq!(outcome.session_id, None);
        assert_eq!(service.history().session_count(), 0);
    }

    #[tokio::test]
    async fn test_new_session_is_minted() {
        let service = service(20);
        let outcome = service.handle(None, "hello there").await;

        assert!(outcome.new_session);
        let id = outcome.session_id.unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(outcome.reply.intent, Intent::Greeting);
        assert_eq!(
            outcome.reply.response,
            "Welcome to Sarovar South Spice! How can I help you today?"
        );
        assert_eq!(service.history().get(&id).len(), 2);
    }

    #[tokio::test]
    async fn test_fallback_gets_generic_reply() {
        let service = service(20);
        let outcome = service.handle(Some("s"), "asdf qwerty").await;
        assert!(!outcome.new_session);
        assert_eq!(outcome.reply, ChatReply::new(GENERIC_REPLY, Intent::Fallback));
    }

    #[tokio::test]
    async fn test_rate_limited_skips_history() {
        let service = service(1);
        service.handle(Some("s"), "hello").await;
        let outcome = service.handle(Some("s"), "menu please").await;

        assert_eq!(outcome.reply, ChatReply::new(RATE_LIMITED_REPLY, Intent::Fallback));
        assert_eq!(service.history().get("s").len(), 2);
    }

    #[tokio::test]
    async fn test_message_is_trimmed_in_history() {
        let service = service(20);
        service.handle(Some("s"), "  when do you open?  ").await;
        assert_eq!(service.history().get("s")[0].content, "when do you open?");
    }

    #[test]
    fn test_reply_wire_format() {
        let json = serde_json::to_value(ChatReply::new("Hi", Intent::BookTable)).unwrap();
        assert_eq!(json, serde_json::json!({"response": "Hi", "intent": "book_table"}));
    }
}
