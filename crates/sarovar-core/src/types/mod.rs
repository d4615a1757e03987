pub mod intent;
pub mod message;

pub use intent::{Intent, UnknownIntent};
pub use message::{Message, Role};
