//! Short human-readable reference numbers (booking ids and the
//! `{{booking_id}}` placeholder in canned replies).

use uuid::Uuid;

/// Length of a generated reference
pub const REFERENCE_LEN: usize = 8;

/// Mint a fresh reference: the first eight hex digits of a v4 UUID, uppercased.
pub fn generate_reference() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(REFERENCE_LEN);
    id.to_ascii_uppercase()
}
