//! # Application Commands
//!
//! The verbs a host UI can invoke, grouped by concern. Every command
//! takes the [`AppContext`](crate::state::AppContext) and returns
//! `Result<T, ShellError>`; side effects on the host go through the
//! presentation trait, never directly.
//!
//! ```text
//! commands/
//! ├── auth.rs       ◄─── login gate
//! ├── bootstrap.rs  ◄─── first-run sample data decision
//! ├── cart.rs       ◄─── add / qty delta / clear
//! ├── catalog.rs    ◄─── product list, filter, CRUD
//! ├── checkout.rs   ◄─── cash, submit, confirm, cancel
//! └── sales.rs      ◄─── recorded sale history
//! ```

pub mod auth;
pub mod bootstrap;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod sales;
