//! # Application State
//!
//! Two state layers: [`ConfigState`] is read-only after startup, while
//! [`Session`] holds everything the operator mutates during a shift.
//! [`AppContext`] bundles them with the store adapter and the
//! presentation backend so commands take a single parameter.

mod config;
mod session;

pub use config::ConfigState;
pub use session::{ActiveView, AppContext, CheckoutStage, PendingReceipt, Session};
