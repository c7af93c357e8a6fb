//! # Cart Engine
//!
//! Maintains the ordered list of line items for the sale in progress.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Pick Product ───► add_product() ───► push qty=1 / qty+1   │
//! │  Qty Buttons ────► change_qty()  ───► delta, remove at 0   │
//! │  Cancel/Done ────► clear()       ───► items.clear()        │
//! │                                                            │
//! │  After EVERY mutation the register recomputes change,      │
//! │  so derived state is never stale.                          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `product_id`: adding the same product again
//!   increments its quantity instead of appending
//! - Every item's qty is >= 1: a delta driving qty to zero or below
//!   removes the item entirely

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Product;

/// A line item in the cart.
///
/// A frozen snapshot of the product at the moment it was added: if the
/// catalog entry is edited afterwards, the cart (and any sale recorded
/// from it) keeps the values the customer saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Id of the product this line was created from.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Image reference at time of adding (frozen).
    pub image: String,

    /// Unit price in minor units at time of adding (frozen).
    #[serde(rename = "price")]
    pub price_minor: i64,

    /// Option descriptor at time of adding (frozen).
    pub option: Option<String>,

    /// Quantity, always >= 1 while the item is in the cart.
    pub qty: i64,
}

impl CartItem {
    /// Snapshots a product into a new line item with qty 1.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price_minor: product.price_minor,
            option: product.option.clone(),
            qty: 1,
        }
    }

    /// Line total: unit price times quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_minor(self.price_minor * self.qty)
    }
}

/// Outcome of a quantity mutation, used by the shell to pick the right
/// audio cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A line's quantity was created or adjusted.
    Updated,
    /// A line reached zero quantity and was removed.
    Removed,
    /// The product id was not in the cart; nothing happened.
    Ignored,
}

/// The shopping cart: an ordered list of line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Adds a product to the cart, or increments its quantity by one if
    /// a line for it already exists.
    pub fn add_product(&mut self, product: &Product) -> CartChange {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.qty += 1;
        } else {
            self.items.push(CartItem::from_product(product));
        }
        CartChange::Updated
    }

    /// Applies a quantity delta to the line for `product_id`.
    ///
    /// ## Behavior
    /// - Resulting qty <= 0: the line is removed entirely
    /// - Unknown product id: no-op, returns [`CartChange::Ignored`]
    pub fn change_qty(&mut self, product_id: &str, delta: i64) -> CartChange {
        let Some(index) = self.items.iter().position(|i| i.product_id == product_id) else {
            return CartChange::Ignored;
        };

        let after = self.items[index].qty + delta;
        if after <= 0 {
            self.items.remove(index);
            CartChange::Removed
        } else {
            self.items[index].qty = after;
            CartChange::Updated
        }
    }

    /// Sum over all lines of qty times unit price.
    pub fn total_price(&self) -> Money {
        Money::from_minor(self.items.iter().map(|i| i.price_minor * i.qty).sum())
    }

    /// Total quantity across all lines (the badge count).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.qty).sum()
    }

    /// Number of distinct lines.
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_minor: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_minor,
            image: format!("img/{}.png", id),
            option: None,
        }
    }

    #[test]
    fn add_product_starts_at_qty_one() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("p1", 10_000));

        assert_eq!(cart.unique_items(), 1);
        assert_eq!(cart.items()[0].qty, 1);
        assert_eq!(cart.total_price().minor(), 10_000);
    }

    #[test]
    fn adding_same_product_increments_quantity() {
        let mut cart = Cart::new();
        let product = test_product("p1", 10_000);

        cart.add_product(&product);
        cart.add_product(&product);
        cart.add_product(&product);

        assert_eq!(cart.unique_items(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_price().minor(), 30_000);
    }

    #[test]
    fn items_are_unique_by_product_id() {
        let mut cart = Cart::new();
        let a = test_product("a", 5_000);
        let b = test_product("b", 7_000);

        cart.add_product(&a);
        cart.add_product(&b);
        cart.add_product(&a);

        assert_eq!(cart.unique_items(), 2);
        assert!(cart.items().iter().all(|i| i.qty >= 1));
        assert_eq!(cart.total_price().minor(), 2 * 5_000 + 7_000);
    }

    #[test]
    fn change_qty_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("p1", 10_000));

        let change = cart.change_qty("p1", -1);

        assert_eq!(change, CartChange::Removed);
        assert!(cart.is_empty());
        assert_eq!(cart.total_price().minor(), 0);
    }

    #[test]
    fn change_qty_below_zero_also_removes_line() {
        let mut cart = Cart::new();
        let product = test_product("p1", 10_000);
        cart.add_product(&product);

        assert_eq!(cart.change_qty("p1", -5), CartChange::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn change_qty_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("p1", 10_000));

        assert_eq!(cart.change_qty("missing", 1), CartChange::Ignored);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn removal_excludes_line_from_total() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("a", 5_000));
        cart.add_product(&test_product("b", 7_000));

        cart.change_qty("a", -1);

        assert_eq!(cart.unique_items(), 1);
        assert_eq!(cart.total_price().minor(), 7_000);
    }

    #[test]
    fn clear_resets_total_to_zero() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("p1", 10_000));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_price().minor(), 0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn snapshot_survives_catalog_edits() {
        let mut cart = Cart::new();
        let mut product = test_product("p1", 10_000);
        cart.add_product(&product);

        product.price_minor = 99_000;
        product.name = "Renamed".to_string();

        assert_eq!(cart.items()[0].price_minor, 10_000);
        assert_eq!(cart.items()[0].name, "Product p1");
    }

    #[test]
    fn item_json_roundtrip_is_lossless() {
        let mut cart = Cart::new();
        let mut with_option = test_product("p1", 12_000);
        with_option.option = Some("hot".to_string());
        cart.add_product(&with_option);
        cart.add_product(&test_product("p2", 5_000));
        cart.change_qty("p2", 2);

        let json = serde_json::to_string(cart.items()).unwrap();
        let back: Vec<CartItem> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, cart.items());
    }
}
