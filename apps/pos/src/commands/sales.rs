//! # Sale History Commands

use tracing::debug;

use crate::error::ShellError;
use crate::state::{ActiveView, AppContext};
use tally_core::SaleRecord;

/// All recorded sales, newest first.
pub async fn list_sales(ctx: &AppContext) -> Result<Vec<SaleRecord>, ShellError> {
    let sales = ctx.store.sales().list_all().await?;
    Ok(sales)
}

/// Switches to the sale history screen and returns its contents.
pub async fn open_sales(ctx: &mut AppContext) -> Result<Vec<SaleRecord>, ShellError> {
    let sales = list_sales(ctx).await?;
    ctx.session.active_view = ActiveView::SalesHistory;

    debug!(count = sales.len(), "Sales history opened");
    Ok(sales)
}

/// Switches back to the register screen.
pub fn open_register(ctx: &mut AppContext) {
    ctx.session.active_view = ActiveView::Register;
}
