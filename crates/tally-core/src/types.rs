//! # Domain Types
//!
//! Core domain records used throughout Tally POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌───────────────┐   ┌────────────────┐   ┌───────────────┐
//! │   Product     │   │  SaleRecord    │   │    User       │
//! │  ───────────  │   │  ────────────  │   │  ───────────  │
//! │  id (uuid)    │   │  id (uuid)     │   │  id (uuid)    │
//! │  name         │   │  receipt_no    │   │  username     │
//! │  price_minor  │   │  date, items   │   │  password_hash│
//! │  image/option │   │  total_minor   │   │  role         │
//! └───────────────┘   └────────────────┘   └───────────────┘
//! ```
//!
//! ## Draft Pattern
//! Each persisted record has a draft counterpart without an id
//! (`ProductDraft`, `UserDraft`, `SaleDraft`). Drafts validate their
//! fields on construction; the store adapter assigns the id at insert
//! time. A `User` draft is also the only place a plaintext password
//! exists: the store hashes it before anything is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::validation::{validate_password, validate_price, validate_product_name, validate_username};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (uuid v4), assigned by the store adapter.
    pub id: String,

    /// Display name shown in the catalog and on receipts.
    pub name: String,

    /// Price in minor currency units.
    #[serde(rename = "price")]
    pub price_minor: i64,

    /// Image reference (a path or URL resolved by the host shell).
    pub image: String,

    /// Free-form descriptor ("hot", "large", ...), if any.
    pub option: Option<String>,
}

impl Product {
    /// Returns the price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_minor(self.price_minor)
    }
}

/// An unpersisted product: everything but the id.
///
/// Also the shape of one entry in the bundled sample dataset's
/// `products` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(rename = "price")]
    pub price_minor: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub option: Option<String>,
}

impl ProductDraft {
    /// Creates a validated product draft.
    ///
    /// ## Rules
    /// - name must be non-empty (and at most 200 characters)
    /// - price must not be negative
    pub fn new(
        name: impl Into<String>,
        price_minor: i64,
        image: impl Into<String>,
        option: Option<String>,
    ) -> ValidationResult<Self> {
        let draft = ProductDraft {
            name: name.into(),
            price_minor,
            image: image.into(),
            option,
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Re-checks the field rules, for drafts built by deserialization.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.name)?;
        validate_price(self.price_minor)?;
        Ok(())
    }

    /// Attaches a store-assigned id, producing the persisted record.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            price_minor: self.price_minor,
            image: self.image,
            option: self.option,
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// A cashier account.
///
/// Only the argon2 hash of the password is ever stored; see
/// `UserRepository` in tally-store for the hashing and verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Unique identifier (uuid v4), assigned by the store adapter.
    pub id: String,

    /// Login name, unique per store.
    pub username: String,

    /// Salted argon2 hash in PHC string format.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Optional profile role ("manager", "cashier", ...).
    pub role: Option<String>,
}

/// An unpersisted user with a plaintext password.
///
/// Matches one entry in the sample dataset's `users` array. The
/// plaintext field never outlives the insert that hashes it.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserDraft {
    /// Creates a validated user draft.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: Option<String>,
    ) -> ValidationResult<Self> {
        let draft = UserDraft {
            username: username.into(),
            password: password.into(),
            role,
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Re-checks the field rules, for drafts built by deserialization.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_username(&self.username)?;
        validate_password(&self.password)?;
        Ok(())
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A finalized, persisted sale. Append-only: once recorded, immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Unique identifier (uuid v4), assigned by the store adapter.
    pub id: String,

    /// Generated receipt number, `"<prefix>-<unix-seconds>"`.
    pub receipt_no: String,

    /// The formatted date/time string shown on the printed receipt,
    /// frozen at submit time.
    pub date: String,

    /// When the sale was recorded; used for newest-first ordering.
    pub recorded_at: DateTime<Utc>,

    /// Snapshot of the cart at submit time.
    pub items: Vec<CartItem>,

    /// Cart total at submit time, minor currency units.
    pub total_minor: i64,
}

impl SaleRecord {
    /// Returns the total as a Money value.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_minor(self.total_minor)
    }
}

/// An unpersisted sale: everything but the id.
#[derive(Debug, Clone)]
pub struct SaleDraft {
    pub receipt_no: String,
    pub date: String,
    pub recorded_at: DateTime<Utc>,
    pub items: Vec<CartItem>,
    pub total_minor: i64,
}

impl SaleDraft {
    /// Attaches a store-assigned id, producing the persisted record.
    pub fn into_record(self, id: String) -> SaleRecord {
        SaleRecord {
            id,
            receipt_no: self.receipt_no,
            date: self.date,
            recorded_at: self.recorded_at,
            items: self.items,
            total_minor: self.total_minor,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_draft_rejects_empty_name() {
        let err = ProductDraft::new("", 1000, "img/none.png", None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "name".to_string()
            }
        );
    }

    #[test]
    fn product_draft_rejects_negative_price() {
        let err = ProductDraft::new("Es Teh", -1, "img/none.png", None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeAmount {
                field: "price".to_string()
            }
        );
    }

    #[test]
    fn product_draft_accepts_zero_price() {
        assert!(ProductDraft::new("Sample Cup", 0, "", None).is_ok());
    }

    #[test]
    fn user_draft_rejects_blank_credentials() {
        assert!(UserDraft::new("", "secret", None).is_err());
        assert!(UserDraft::new("alice", "", None).is_err());
        assert!(UserDraft::new("alice", "secret", None).is_ok());
    }

    #[test]
    fn product_json_uses_price_field() {
        let draft: ProductDraft =
            serde_json::from_str(r#"{"name":"Kopi Panas","price":18000,"image":"img/kopi.png"}"#)
                .unwrap();
        assert_eq!(draft.price_minor, 18_000);
        assert_eq!(draft.image, "img/kopi.png");
        assert!(draft.option.is_none());
        assert!(draft.validate().is_ok());
    }
}
