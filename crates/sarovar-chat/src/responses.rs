use std::collections::HashMap;
use std::path::Path;

use rand::seq::SliceRandom;
use sarovar_core::{generate_reference, Intent};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Placeholder replaced with a fresh reference number
pub const BOOKING_ID_PLACEHOLDER: &str = "{{booking_id}}";

/// Reply used when neither the table nor the defaults cover an intent
pub const GENERIC_REPLY: &str = "I'm not sure about that. Could you try rephrasing?";

#[derive(Error, Debug)]
pub enum ResponseTableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ResponseFile {
    #[serde(default)]
    intents: Vec<ResponseEntry>,
}

#[derive(Debug, Deserialize)]
struct ResponseEntry {
    tag: String,
    #[serde(default)]
    responses: Vec<String>,
}

/// Canned replies per intent, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct ResponseTable {
    entries: HashMap<Intent, Vec<String>>,
}

impl ResponseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{"intents": [{"tag": ..., "responses": [...]}]}`.
    /// Unknown tags and empty candidate lists are skipped; the first entry
    /// for a tag wins.
    pub fn from_json(json: &str) -> Result<Self, ResponseTableError> {
        let file: ResponseFile = serde_json::from_str(json)?;
        let mut entries = HashMap::new();

        for entry in file.intents {
            let intent = match entry.tag.parse::<Intent>() {
                Ok(intent) => intent,
                Err(e) => {
                    debug!("skipping response entry: {}", e);
                    continue;
                }
            };
            if entry.responses.is_empty() {
                continue;
            }
            entries.entry(intent).or_insert(entry.responses);
        }

        Ok(Self { entries })
    }

    pub fn from_path(path: &Path) -> Result<Self, ResponseTableError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load the table, degrading to an empty one on any failure
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(table) => {
                debug!("loaded {} response intents from {:?}", table.len(), path);
                table
            }
            Err(e) => {
                warn!("response table {:?} unavailable, using defaults: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn with_responses(
        mut self,
        intent: Intent,
        responses: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let responses: Vec<String> = responses.into_iter().map(Into::into).collect();
        if !responses.is_empty() {
            self.entries.insert(intent, responses);
        }
        self
    }

    /// A random candidate for the intent with the placeholder filled in
    pub fn pick(&self, intent: Intent) -> Option<String> {
        let candidates = self.entries.get(&intent)?;
        let reply = candidates.choose(&mut rand::thread_rng())?;
        Some(fill_placeholder(reply))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fill_placeholder(reply: &str) -> String {
    if reply.contains(BOOKING_ID_PLACEHOLDER) {
        reply.replace(BOOKING_ID_PLACEHOLDER, &generate_reference())
    } else {
        reply.to_string()
    }
}

/// Built-in reply for an intent; `None` for `Fallback`
pub fn default_response(intent: Intent) -> Option<&'static str> {
    let reply = match intent {
        Intent::Greeting => "Welcome to Sarovar South Spice! How can I help you today?",
        Intent::Menu => {
            "We serve authentic South Indian cuisine. Check out our full menu using the Menu button!"
        }
        Intent::Hours => "We're open daily from 11 AM to 10 PM. Last orders at 9:30 PM.",
        Intent::Contact => "Reach us at (123) 456-7890 or contact@sarovarsouthspice.com",
        Intent::Location => "We're at 123 Flavor Street, Culinary District. Free parking available!",
        Intent::DietaryRestrictions => {
            "We have extensive vegetarian and vegan options. Spice levels can be adjusted."
        }
        Intent::ChefRecommendation => {
            "Chef recommends the Masala Dosa ($8.99), Chettinad Chicken ($14.99), and Sarovar Special Thali ($16.99)!"
        }
        Intent::Bye => "Thank you for visiting! Have a wonderful day!",
        Intent::BookTable => "I'd love to help you book a table! Use the booking form in the chat.",
        Intent::Fallback => return None,
    };
    Some(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "intents": [
            {"tag": "greeting", "responses": ["Vanakkam!", "Hello!"]},
            {"tag": "book_table", "responses": ["Reserved. Your reference is {{booking_id}}."]},
            {"tag": "weather", "responses": ["Sunny"]},
            {"tag": "hours", "responses": []}
        ]
    }"#;

    #[test]
    fn test_from_json_skips_unknown_and_empty() {
        let table = ResponseTable::from_json(SAMPLE).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.pick(Intent::Hours).is_none());
        assert!(table.pick(Intent::Greeting).is_some());
    }

    #[test]
    fn test_pick_from_candidates() {
        let table = ResponseTable::from_json(SAMPLE).unwrap();
        for _ in 0..20 {
            let reply = table.pick(Intent::Greeting).unwrap();
            assert!(reply == "Vanakkam!" || reply == "Hello!");
        }
        assert!(table.pick(Intent::Menu).is_none());
    }

    #[test]
    fn test_placeholder_substitution() {
        let table = ResponseTable::from_json(SAMPLE).unwrap();
        let reply = table.pick(Intent::BookTable).unwrap();

        assert!(!reply.contains(BOOKING_ID_PLACEHOLDER));
        let reference = reply
            .trim_start_matches("Reserved. Your reference is ")
            .trim_end_matches('.');
        assert_eq!(reference.len(), 8);
        assert!(reference
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let table = ResponseTable::load_or_empty(Path::new("/nonexistent/full.json"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_invalid_file_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(ResponseTable::load_or_empty(file.path()).is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        let table = ResponseTable::load_or_empty(file.path());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_defaults_cover_all_but_fallback() {
        for intent in Intent::ALL {
            assert_eq!(
                default_response(intent).is_some(),
                intent != Intent::Fallback,
                "{}",
                intent
            );
        }
    }
}
