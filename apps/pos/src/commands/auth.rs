//! # Auth Commands
//!
//! A single login gate in front of the register. Credential checking
//! lives in the store adapter; a failed attempt surfaces as an alert
//! on the host plus `Ok(false)`, never as an error, so the login form
//! simply stays up.

use tracing::info;

use crate::error::ShellError;
use crate::state::AppContext;

/// Attempts to log a cashier in.
pub async fn login(
    ctx: &mut AppContext,
    username: &str,
    password: &str,
) -> Result<bool, ShellError> {
    let user = ctx
        .store
        .users()
        .find_by_credentials(username, password)
        .await?;

    match user {
        Some(user) => {
            info!(username = %user.username, "Login succeeded");
            ctx.session.current_user = Some(user);
            Ok(true)
        }
        None => {
            ctx.presentation().alert("Wrong username or password");
            Ok(false)
        }
    }
}

/// Logs the current cashier out and abandons the sale in progress.
pub fn logout(ctx: &mut AppContext) {
    if let Some(user) = ctx.session.current_user.take() {
        info!(username = %user.username, "Logged out");
    }
    ctx.session.reset_sale();
    ctx.session.keyword.clear();
    ctx.session.active_view = crate::state::ActiveView::Register;
}
