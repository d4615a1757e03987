use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of intents a customer message can be tagged with.
///
/// Declaration order matters: the keyword classifier resolves score ties in
/// favour of the variant declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    BookTable,
    Menu,
    Hours,
    Bye,
    Contact,
    Location,
    DietaryRestrictions,
    ChefRecommendation,
    Fallback,
}

impl Intent {
    /// Every intent, in declaration order
    pub const ALL: [Intent; 10] = [
        Intent::Greeting,
        Intent::BookTable,
        Intent::Menu,
        Intent::Hours,
        Intent::Bye,
        Intent::Contact,
        Intent::Location,
        Intent::DietaryRestrictions,
        Intent::ChefRecommendation,
        Intent::Fallback,
    ];

    /// Wire name of the intent
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::BookTable => "book_table",
            Intent::Menu => "menu",
            Intent::Hours => "hours",
            Intent::Bye => "bye",
            Intent::Contact => "contact",
            Intent::Location => "location",
            Intent::DietaryRestrictions => "dietary_restrictions",
            Intent::ChefRecommendation => "chef_recommendation",
            Intent::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown intent tag: {0}")]
pub struct UnknownIntent(pub String);

impl std::str::FromStr for Intent {
    type Err = UnknownIntent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .iter()
            .copied()
            .find(|intent| intent.as_str() == s)
            .ok_or_else(|| UnknownIntent(s.to_string()))
    }
}
