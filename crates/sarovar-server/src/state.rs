use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use sarovar_chat::{
    ChatService, HistoryStore, LlmAssistant, LlmAssistantConfig, RateLimitConfig, RateLimiter,
    ResponseTable,
};
use sarovar_config::{expand_tilde, Config};
use sarovar_llm::{OpenAiProvider, ProviderConfig};
use sarovar_store::Store;
use tracing::{error, info, warn};

/// Shared application state handed to every handler
pub struct AppState {
    pub chat: ChatService,
    /// `None` when the database could not be opened
    pub store: Option<Arc<Store>>,
    pub llm_enabled: bool,
    pub session_cookie: String,
}

impl AppState {
    pub fn new(chat: ChatService, store: Option<Arc<Store>>, llm_enabled: bool) -> Self {
        Self {
            chat,
            store,
            llm_enabled,
            session_cookie: "session_id".to_string(),
        }
    }

    pub fn with_session_cookie(mut self, name: impl Into<String>) -> Self {
        self.session_cookie = name.into();
        self
    }

    /// Build everything from config. `api_key` and `db_path` override the
    /// config values. Neither a missing key nor a broken database is fatal.
    pub fn from_config(config: &Config, api_key: Option<String>, db_path: Option<PathBuf>) -> Self {
        let limiter = Arc::new(RateLimiter::new(RateLimitConfig::new(
            config.chat.rate_limit,
            Duration::from_secs(config.chat.rate_window_secs),
        )));
        let history = Arc::new(HistoryStore::new(config.chat.max_history));

        let assistant = build_assistant(config, api_key);
        let llm_enabled = assistant.is_enabled();

        let table = match &config.chat.responses_path {
            Some(path) => ResponseTable::load_or_empty(&resolve_path(path)),
            None => ResponseTable::new(),
        };
        info!("Response table: {} intents", table.len());

        let chat = ChatService::new(limiter, history, assistant, Arc::new(table));

        let db_path = db_path.or_else(|| config.storage.path.as_deref().map(resolve_path));
        let store = db_path.and_then(|path| open_store(&path));

        Self::new(chat, store, llm_enabled).with_session_cookie(config.server.session_cookie.clone())
    }

    pub fn db_connected(&self) -> bool {
        self.store.is_some()
    }
}

fn resolve_path(path: &str) -> PathBuf {
    expand_tilde(path).unwrap_or_else(|| PathBuf::from(path))
}

fn build_assistant(config: &Config, api_key: Option<String>) -> LlmAssistant {
    if !config.llm.enabled {
        info!("LLM disabled in config");
        return LlmAssistant::disabled();
    }

    let Some(api_key) = api_key.or_else(|| config.llm.api_key()) else {
        warn!(
            "{} not set, replies will come from the response table",
            config.llm.api_key_env
        );
        return LlmAssistant::disabled();
    };

    let provider_config = ProviderConfig::new("groq", config.llm.base_url.clone())
        .with_api_key(api_key)
        .with_model(config.llm.model.clone())
        .with_timeout(Duration::from_secs(config.llm.timeout_seconds));

    match OpenAiProvider::with_config(provider_config) {
        Ok(provider) => LlmAssistant::new(
            Arc::new(provider),
            LlmAssistantConfig {
                model: config.llm.model.clone(),
                temperature: config.llm.temperature,
                max_tokens: config.llm.max_tokens,
                history_window: config.llm.history_window,
            },
        ),
        Err(e) => {
            error!("Failed to build LLM provider: {}", e);
            LlmAssistant::disabled()
        }
    }
}

fn open_store(path: &Path) -> Option<Arc<Store>> {
    match Store::open(path) {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            error!("Database init failed at {:?}, running without storage: {}", path, e);
            None
        }
    }
}
