//! # Cash Register
//!
//! Tracks cash tendered and the change owed for the sale in progress.
//!
//! ## Invariant
//! `change = cash - cart.total_price()` holds after every cart or cash
//! mutation. The register is updated eagerly (the caller passes the
//! cart to each mutation) rather than recomputed lazily, so a display
//! reading `change` never sees a stale value.
//!
//! ## Checkout Gate
//! `can_submit` is the single predicate deciding whether the submit
//! action is enabled: the customer has tendered enough cash
//! (change >= 0) and the cart is non-empty.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::money::Money;

/// Cash and change for the sale in progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Register {
    cash: Money,
    change: Money,
}

impl Register {
    /// Creates a register with zero cash and change.
    pub fn new() -> Self {
        Register::default()
    }

    /// Cash tendered so far.
    #[inline]
    pub fn cash(&self) -> Money {
        self.cash
    }

    /// Change owed (negative while the cash is short of the total).
    #[inline]
    pub fn change(&self) -> Money {
        self.change
    }

    /// Adds a quick-cash amount to the tendered total.
    pub fn add_cash(&mut self, amount: Money, cart: &Cart) {
        self.cash += amount;
        self.update_change(cart);
    }

    /// Replaces the tendered total from free-form text input.
    ///
    /// Digits are extracted, everything else discarded; absent digits
    /// mean zero. Unlike [`Register::add_cash`] this is an absolute
    /// assignment, not an accumulation.
    pub fn set_cash_from_text(&mut self, text: &str, cart: &Cart) {
        self.cash = Money::from_digits(text);
        self.update_change(cart);
    }

    /// Recomputes `change = cash - total`. Call after every cart
    /// mutation.
    pub fn update_change(&mut self, cart: &Cart) {
        self.change = self.cash - cart.total_price();
    }

    /// Whether checkout may proceed: change is non-negative and the
    /// cart has at least one line.
    pub fn can_submit(&self, cart: &Cart) -> bool {
        !self.change.is_negative() && !cart.is_empty()
    }

    /// Resets cash and change to zero (after a recorded sale).
    pub fn clear(&mut self) {
        self.cash = Money::zero();
        self.change = Money::zero();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
