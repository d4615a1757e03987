use sarovar_core::Intent;

/// Score added when any keyword of a category matches
const MATCH_SCORE: u32 = 10;

/// A category wins only with a score above this
const MIN_SCORE: u32 = 4;

/// Keyword sets in tie-break order; the first category wins a tie
const KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &["hello", "hi", "hey", "greetings", "namaste", "vanakkam"],
    ),
    (
        Intent::BookTable,
        &["book", "reservation", "table", "reserve", "seat"],
    ),
    (
        Intent::Menu,
        &["menu", "food", "eat", "order", "dish", "price", "cost"],
    ),
    (
        Intent::Hours,
        &["hour", "timing", "open", "close", "when", "schedule"],
    ),
    (
        Intent::Bye,
        &["bye", "goodbye", "see you", "thanks", "thank you"],
    ),
    (
        Intent::Contact,
        &["contact", "phone", "email", "reach", "call"],
    ),
    (
        Intent::Location,
        &["where", "location", "address", "direction", "parking"],
    ),
    (
        Intent::DietaryRestrictions,
        &["vegetarian", "vegan", "allergy", "gluten", "spicy", "diet"],
    ),
    (
        Intent::ChefRecommendation,
        &["recommend", "special", "best", "chef", "popular", "try"],
    ),
];

/// Substring keyword classifier.
///
/// Matching is plain substring search on the lowercased text, so short
/// keywords also hit inside longer words ("hi" in "this").
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, text: &str) -> Intent {
        let text = text.trim().to_lowercase();

        let mut best = (Intent::Fallback, 0);
        for (intent, score) in self.scores(&text) {
            if score > best.1 {
                best = (intent, score);
            }
        }

        if best.1 > MIN_SCORE {
            best.0
        } else {
            Intent::Fallback
        }
    }

    /// Score of every category for already-normalized text
    fn scores<'a>(&self, text: &'a str) -> impl Iterator<Item = (Intent, u32)> + 'a {
        KEYWORDS.iter().map(move |(intent, words)| {
            let score = if words.iter().any(|w| text.contains(w)) {
                MATCH_SCORE
            } else {
                0
            };
            (*intent, score)
        })
    }
}
