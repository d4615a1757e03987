use serde::{Deserialize, Serialize};

/// Default party size when a booking does not give one
pub const DEFAULT_PARTY_SIZE: i64 = 2;

/// A stored table reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// 8-character uppercase reference
    pub id: String,
    pub session_id: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub party_size: i64,
    pub special_requests: String,
    pub status: String,
    pub created_at: String,
}

/// Fields supplied by the customer when booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub date: String,
    pub time: String,
    pub party_size: i64,
    pub special_requests: String,
}

impl NewBooking {
    pub fn new(name: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            time: time.into(),
            party_size: DEFAULT_PARTY_SIZE,
            special_requests: String::new(),
        }
    }

    pub fn with_party_size(mut self, party_size: i64) -> Self {
        self.party_size = party_size;
        self
    }

    pub fn with_special_requests(mut self, requests: impl Into<String>) -> Self {
        self.special_requests = requests.into();
        self
    }
}

/// A menu entry as served by `GET /menu`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub is_veg: bool,
    pub is_vegan: bool,
    pub is_spicy: bool,
    pub is_bestseller: bool,
    pub image_url: Option<String>,
}

/// Menu query filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    pub category: Option<String>,
    pub veg_only: bool,
}

impl MenuFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn veg_only(mut self) -> Self {
        self.veg_only = true;
        self
    }
}

/// A conversation rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub session_id: String,
    /// 1..=5
    pub rating: u8,
    pub feedback: String,
}
