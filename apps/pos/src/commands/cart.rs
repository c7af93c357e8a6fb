//! # Cart Commands
//!
//! Mutations on the sale in progress. Every mutation recomputes the
//! register's change so the payable state a host renders is never
//! stale, and each picks the audio cue matching what happened.

use tracing::debug;

use crate::error::ShellError;
use crate::presentation::FeedbackSound;
use crate::state::AppContext;
use tally_core::CartChange;

/// Adds a catalog product to the cart, or bumps its quantity by one.
pub fn add_to_cart(ctx: &mut AppContext, product_id: &str) -> Result<(), ShellError> {
    let session = &mut ctx.session;
    let product = session
        .products
        .iter()
        .find(|p| p.id == product_id)
        .ok_or_else(|| ShellError::not_found("Product", product_id))?
        .clone();

    session.cart.add_product(&product);
    session.register.update_change(&session.cart);

    debug!(product_id, items = session.cart.item_count(), "Added to cart");
    ctx.play(FeedbackSound::Beep);
    Ok(())
}

/// Applies a quantity delta to one cart line.
///
/// Driving a line to zero or below removes it; an unknown product id
/// is a silent no-op, matching a double-tap on a just-removed row.
pub fn change_qty(ctx: &mut AppContext, product_id: &str, delta: i64) -> CartChange {
    let session = &mut ctx.session;
    let change = session.cart.change_qty(product_id, delta);
    session.register.update_change(&session.cart);

    match change {
        CartChange::Updated => ctx.play(FeedbackSound::Beep),
        CartChange::Removed => ctx.play(FeedbackSound::Clear),
        CartChange::Ignored => {}
    }
    change
}

/// Empties the cart and resets the tendered cash.
pub fn clear_cart(ctx: &mut AppContext) {
    let session = &mut ctx.session;
    session.cart.clear();
    session.register.clear();

    debug!("Cart cleared");
    ctx.play(FeedbackSound::Clear);
}
