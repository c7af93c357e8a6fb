//! # Repository Implementations
//!
//! One repository per record collection. All ids are uuid v4 strings
//! generated here at insert time; callers hand over drafts, never ids.
//!
//! ```text
//! repository/
//! ├── product.rs   ◄── catalog records: get-all/add/update/delete
//! ├── sale.rs      ◄── append-only sales with JSON item snapshots
//! ├── user.rs      ◄── accounts + argon2 credential verification
//! └── settings.rs  ◄── string key-value pairs (first-run marker)
//! ```

pub mod product;
pub mod sale;
pub mod settings;
pub mod user;

use uuid::Uuid;

/// Generates a fresh record id.
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
