//! # tally-store: Persistence Layer for Tally POS
//!
//! Local storage for the POS: SQLite through sqlx, wrapped in a small
//! store-adapter API of per-collection repositories.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  apps/pos command layer                                     │
//! │       │                                                     │
//! │  ┌────▼────────────────────────────────────────────────┐    │
//! │  │              tally-store (THIS CRATE)               │    │
//! │  │                                                     │    │
//! │  │  ┌──────────┐  ┌──────────────────┐  ┌──────────┐   │    │
//! │  │  │  Store   │  │   Repositories   │  │Migrations│   │    │
//! │  │  │ (pool.rs)│◄─│ products, sales, │  │(embedded)│   │    │
//! │  │  │          │  │ users, settings  │  │          │   │    │
//! │  │  └──────────┘  └──────────────────┘  └──────────┘   │    │
//! │  └────┬────────────────────────────────────────────────┘    │
//! │       ▼                                                     │
//! │  SQLite file (WAL mode) or :memory: under test              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! Each collection supports get-all, add, update, delete. Adds assign
//! a uuid v4 id before the row is written. Any sqlx failure surfaces
//! as [`StoreError`] and aborts the current action; there is no retry
//! layer and no partial-write recovery.
//!
//! ## Usage
//! ```rust,ignore
//! use tally_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("tally.db")).await?;
//! let products = store.products().list_all().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use pool::{Store, StoreConfig};

pub use repository::product::ProductRepository;
pub use repository::sale::SaleRepository;
pub use repository::settings::{SettingsRepository, FIRST_RUN_KEY};
pub use repository::user::UserRepository;
