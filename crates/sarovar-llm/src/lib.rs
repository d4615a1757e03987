pub mod auth;
pub mod error;
pub mod provider;
pub mod providers;
pub mod transformer;

pub use auth::{ApiKeyAuth, Authenticator, NoAuth};
pub use error::{ConversionError, LLMError, Result};
pub use provider::{AuthConfig, BaseProvider, LLMProvider, ProviderConfig};
pub use providers::OpenAiProvider;
pub use transformer::{OpenAiTransformer, SchemaTransformer};
