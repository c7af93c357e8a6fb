//! # tally-core: Pure Business Logic for Tally POS
//!
//! This crate is the heart of Tally POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host shell (window, printer, audio)                        │
//! │            │ Presentation trait                             │
//! │  ┌─────────▼─────────────────────────────────────────────┐  │
//! │  │  apps/pos commands                                    │  │
//! │  │  add_to_cart, submit, confirm_and_record, login, ...  │  │
//! │  └─────────┬─────────────────────────────────────────────┘  │
//! │            │                                                │
//! │  ┌─────────▼─────────────────────────────────────────────┐  │
//! │  │          ★ tally-core (THIS CRATE) ★                  │  │
//! │  │  money · types · cart · register · catalog · receipt  │  │
//! │  │  NO I/O • NO DATABASE • PURE FUNCTIONS                │  │
//! │  └─────────┬─────────────────────────────────────────────┘  │
//! │            │                                                │
//! │  ┌─────────▼─────────────────────────────────────────────┐  │
//! │  │  tally-store (SQLite repositories)                    │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Product, User, SaleRecord)
//! - [`money`] - Money in integer minor units (no floating point!)
//! - [`cart`] - Cart engine: add-or-increment, quantity deltas, totals
//! - [`register`] - Cash tendered and change, submit eligibility
//! - [`catalog`] - Keyword filtering over the product list
//! - [`receipt`] - Receipt number and date formatting
//! - [`error`] / [`validation`] - Typed validation failures
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, same output; the clock is a parameter
//! 2. **No I/O**: database and file system access are forbidden here
//! 3. **Integer money**: all amounts are minor currency units (i64)
//! 4. **Explicit errors**: typed errors, never strings or panics

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod receipt;
pub mod register;
pub mod types;
pub mod validation;

pub use cart::{Cart, CartChange, CartItem};
pub use error::ValidationError;
pub use money::Money;
pub use receipt::{format_receipt_date, receipt_number};
pub use register::Register;
pub use types::{Product, ProductDraft, SaleDraft, SaleRecord, User, UserDraft};
