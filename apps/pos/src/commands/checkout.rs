//! # Checkout Commands
//!
//! Cash entry and the submit / confirm / cancel state machine.
//!
//! Submit freezes the receipt (number, timestamp, line items, totals)
//! and shows it; nothing is persisted until the operator confirms.
//! Cancel throws the frozen receipt away and returns to editing with
//! the cart and cash intact.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::ShellError;
use crate::presentation::FeedbackSound;
use crate::state::{AppContext, CheckoutStage, PendingReceipt};
use tally_core::receipt::{format_receipt_date, receipt_number};
use tally_core::types::SaleDraft;
use tally_core::Money;

/// Adds a quick-cash denomination to the tendered amount.
pub fn add_cash(ctx: &mut AppContext, amount_minor: i64) {
    let session = &mut ctx.session;
    session
        .register
        .add_cash(Money::from_minor(amount_minor), &session.cart);

    debug!(amount = amount_minor, cash = %session.register.cash(), "Cash added");
    ctx.play(FeedbackSound::Beep);
}

/// Replaces the tendered amount with the digits typed so far.
///
/// Non-digit characters are dropped; an empty or digit-free string
/// means zero.
pub fn set_cash_from_text(ctx: &mut AppContext, text: &str) {
    let session = &mut ctx.session;
    session.register.set_cash_from_text(text, &session.cart);

    debug!(cash = %session.register.cash(), "Cash entered");
    ctx.play(FeedbackSound::Beep);
}

/// Whether the sale is payable: change >= 0 and the cart is non-empty.
pub fn can_submit(ctx: &AppContext) -> bool {
    ctx.session.register.can_submit(&ctx.session.cart)
}

/// Freezes the receipt for the sale in progress and shows it.
pub fn submit(ctx: &mut AppContext) -> Result<(), ShellError> {
    if !matches!(ctx.session.stage, CheckoutStage::Idle) {
        return Err(ShellError::checkout(
            "A receipt is already awaiting confirmation",
        ));
    }
    if !can_submit(ctx) {
        return Err(ShellError::checkout(
            "Cash is below the total or the cart is empty",
        ));
    }

    let now = Utc::now();
    let session = &ctx.session;
    let pending = PendingReceipt {
        receipt_no: receipt_number(&ctx.config.receipt_prefix, now),
        date: format_receipt_date(now),
        recorded_at: now,
        items: session.cart.items().to_vec(),
        total_minor: session.cart.total_price().minor(),
        cash_minor: session.register.cash().minor(),
        change_minor: session.register.change().minor(),
    };

    info!(receipt_no = %pending.receipt_no, total = pending.total_minor, "Receipt submitted");

    let preview = pending.preview(&ctx.config);
    ctx.session.stage = CheckoutStage::ReceiptPending(pending);
    ctx.presentation().show_receipt(&preview);
    ctx.play(FeedbackSound::Beep);
    Ok(())
}

/// Persists the pending receipt as a recorded sale and starts the
/// next sale. Optionally prints the receipt first.
pub async fn confirm_and_record(
    ctx: &mut AppContext,
    print: bool,
) -> Result<tally_core::SaleRecord, ShellError> {
    let stage = std::mem::take(&mut ctx.session.stage);
    let CheckoutStage::ReceiptPending(pending) = stage else {
        return Err(ShellError::checkout("No receipt awaiting confirmation"));
    };

    let draft = SaleDraft {
        receipt_no: pending.receipt_no.clone(),
        date: pending.date.clone(),
        recorded_at: pending.recorded_at,
        items: pending.items.clone(),
        total_minor: pending.total_minor,
    };
    // A storage failure aborts only the recording: the receipt stays
    // pending so the operator can retry or cancel.
    let record = match ctx.store.sales().insert(draft).await {
        Ok(record) => record,
        Err(err) => {
            ctx.session.stage = CheckoutStage::ReceiptPending(pending);
            return Err(err.into());
        }
    };

    if print {
        ctx.presentation().print_receipt(&pending.preview(&ctx.config));
    }
    ctx.presentation().close_receipt();
    ctx.session.reset_sale();

    info!(id = %record.id, receipt_no = %record.receipt_no, "Sale recorded");
    Ok(record)
}

/// Discards the pending receipt and returns to editing.
pub fn cancel_receipt(ctx: &mut AppContext) {
    if matches!(ctx.session.stage, CheckoutStage::ReceiptPending(_)) {
        ctx.session.stage = CheckoutStage::Idle;
        ctx.presentation().close_receipt();
        debug!("Receipt cancelled");
    }
}
