pub mod types;
pub mod chat;
pub mod reference;

pub use types::{Intent, Message, Role, UnknownIntent};

pub use chat::{
    ChatRequest,
    ChatResponse,
    ChatOptions,
    ChatUsage,
};

pub use reference::{generate_reference, REFERENCE_LEN};
