//! # Sarovar Chat
//!
//! The reply pipeline behind `POST /chat`:
//!
//! - [`RateLimiter`]: per-session sliding window
//! - [`KeywordClassifier`]: keyword scoring into an [`Intent`]
//! - [`ResponseTable`]: canned replies loaded from JSON, with hardcoded defaults
//! - [`LlmAssistant`]: optional completion call with the house system prompt
//! - [`ChatService`]: runs the steps above and keeps per-session history

pub mod assistant;
pub mod classifier;
pub mod history;
pub mod rate_limit;
pub mod responses;
pub mod service;
pub mod strategy;

pub use assistant::{LlmAssistant, LlmAssistantConfig, SYSTEM_PROMPT};
pub use classifier::KeywordClassifier;
pub use history::HistoryStore;
pub use rate_limit::{RateLimitConfig, RateLimiter};
pub use responses::{default_response, ResponseTable, ResponseTableError, GENERIC_REPLY};
pub use service::{ChatOutcome, ChatReply, ChatService, EMPTY_MESSAGE_REPLY, RATE_LIMITED_REPLY};
pub use strategy::{
    DefaultsStrategy, GenericStrategy, LlmStrategy, ReplyContext, ResponseStrategy,
    TemplateStrategy,
};

pub use sarovar_core::Intent;
