pub mod error;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod session;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use server::{configure, cors, json_config, run_server};
pub use state::AppState;
