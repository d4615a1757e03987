use dashmap::DashMap;
use sarovar_core::Message;

/// Rolling per-session conversation history, process-local
#[derive(Debug)]
pub struct HistoryStore {
    max_entries: usize,
    sessions: DashMap<String, Vec<Message>>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(20)
    }
}

impl HistoryStore {
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            sessions: DashMap::new(),
        }
    }

    /// Create an empty history if the session has none yet
    pub fn ensure(&self, session_id: &str) {
        self.sessions.entry(session_id.to_string()).or_default();
    }

    /// Copy of the session history, oldest first
    pub fn get(&self, session_id: &str) -> Vec<Message> {
        self.sessions
            .get(session_id)
            .map(|h| h.clone())
            .unwrap_or_default()
    }

    /// Append one user/assistant exchange and keep only the newest entries
    pub fn record_turn(&self, session_id: &str, user: &str, reply: &str) {
        let mut history = self.sessions.entry(session_id.to_string()).or_default();
        history.push(Message::user(user));
        history.push(Message::assistant(reply));

        let excess = history.len().saturating_sub(self.max_entries);
        if excess > 0 {
            history.drain(..excess);
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
