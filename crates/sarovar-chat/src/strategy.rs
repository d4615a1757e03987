use std::sync::Arc;

use async_trait::async_trait;
use sarovar_core::{Intent, Message};

use crate::assistant::LlmAssistant;
use crate::responses::{default_response, ResponseTable, GENERIC_REPLY};

/// Everything a strategy may look at when producing a reply
#[derive(Debug, Clone, Copy)]
pub struct ReplyContext<'a> {
    pub message: &'a str,
    pub intent: Intent,
    /// Prior turns, oldest first, without the current message
    pub history: &'a [Message],
}

/// One step of the reply fallback chain
#[async_trait]
pub trait ResponseStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// `None` hands over to the next strategy
    async fn respond(&self, ctx: &ReplyContext<'_>) -> Option<String>;
}

/// Ask the completion API
pub struct LlmStrategy {
    assistant: LlmAssistant,
}

impl LlmStrategy {
    pub fn new(assistant: LlmAssistant) -> Self {
        Self { assistant }
    }
}

#[async_trait]
impl ResponseStrategy for LlmStrategy {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn respond(&self, ctx: &ReplyContext<'_>) -> Option<String> {
        self.assistant.complete(ctx.message, ctx.history).await
    }
}

/// Canned replies from the loaded response table
pub struct TemplateStrategy {
    table: Arc<ResponseTable>,
}

impl TemplateStrategy {
    pub fn new(table: Arc<ResponseTable>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl ResponseStrategy for TemplateStrategy {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn respond(&self, ctx: &ReplyContext<'_>) -> Option<String> {
        self.table.pick(ctx.intent)
    }
}

/// Built-in reply per intent
pub struct DefaultsStrategy;

#[async_trait]
impl ResponseStrategy for DefaultsStrategy {
    fn name(&self) -> &'static str {
        "default"
    }

    async fn respond(&self, ctx: &ReplyContext<'_>) -> Option<String> {
        default_response(ctx.intent).map(str::to_string)
    }
}

/// Always answers with the "not understood" message
pub struct GenericStrategy;

#[async_trait]
impl ResponseStrategy for GenericStrategy {
    fn name(&self) -> &'static str {
        "generic"
    }

    async fn respond(&self, _ctx: &ReplyContext<'_>) -> Option<String> {
        Some(GENERIC_REPLY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(intent: Intent) -> ReplyContext<'static> {
        ReplyContext {
            message: "x",
            intent,
            history: &[],
        }
    }

    #[tokio::test]
    async fn test_template_strategy() {
        let table = ResponseTable::new().with_responses(Intent::Hours, ["Open till ten."]);
        let strategy = TemplateStrategy::new(Arc::new(table));

        assert_eq!(
            strategy.respond(&ctx(Intent::Hours)).await.as_deref(),
            Some("Open till ten.")
        );
        assert_eq!(strategy.respond(&ctx(Intent::Menu)).await, None);
    }

    #[tokio::test]
    async fn test_defaults_and_generic() {
        assert_eq!(
            DefaultsStrategy.respond(&ctx(Intent::Bye)).await.as_deref(),
            Some("Thank you for visiting! Have a wonderful day!")
        );
        assert_eq!(DefaultsStrategy.respond(&ctx(Intent::Fallback)).await, None);
        assert_eq!(
            GenericStrategy.respond(&ctx(Intent::Fallback)).await.as_deref(),
            Some(GENERIC_REPLY)
        );
    }

    #[tokio::test]
    async fn test_llm_strategy_disabled() {
        let strategy = LlmStrategy::new(LlmAssistant::disabled());
        assert_eq!(strategy.name(), "llm");
        assert_eq!(strategy.respond(&ctx(Intent::Greeting)).await, None);
    }
}
