//! Array entry keys
//!
//! Content-store arrays need a `_key` on every entry. Keys only identify an
//! entry within a single document and carry no meaning across runs.

use uuid::Uuid;

/// Length of generated keys
pub const KEY_LENGTH: usize = 12;

/// Generate a new random entry key
pub fn generate() -> String {
    let mut key = Uuid::new_v4().simple().to_string();
    key.truncate(KEY_LENGTH);
    key
}
