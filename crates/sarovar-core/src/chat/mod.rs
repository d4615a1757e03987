pub mod request;
pub mod response;

pub use request::{ChatRequest, ChatOptions};
pub use response::{ChatResponse, ChatUsage};
