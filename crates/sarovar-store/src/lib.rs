//! # Sarovar Store
//!
//! SQLite-backed persistence for the restaurant:
//!
//! - **bookings**: table reservations keyed by an 8-character reference
//! - **menu_items**: the catalog, seeded on first start
//! - **ratings**: per-session conversation feedback
//!
//! All access goes through [`Store`], which serializes statements on a single
//! connection.

pub mod error;
pub mod schema;
pub mod seed;
pub mod store;
pub mod types;

pub use error::{StorageError, StorageResult};
pub use seed::{seed_menu, MenuSeed, SEED_MENU};
pub use store::Store;
pub use types::{Booking, MenuFilter, MenuItem, NewBooking, Rating};

/// Categories reported when the store cannot be queried
pub const FALLBACK_CATEGORIES: [&str; 5] =
    ["Breakfast", "Main Course", "Snacks", "Beverages", "Desserts"];
