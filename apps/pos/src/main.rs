//! Binary entry point.
//!
//! Starts the shell headlessly: opens the store, answers the
//! first-run question from the environment, and loads the catalog.
//! A windowing host embeds [`tally_pos::run`] instead of this binary.

use tracing::info;

#[tokio::main]
async fn main() {
    match tally_pos::run().await {
        Ok(ctx) => {
            info!(
                store = %ctx.config.store_name,
                products = ctx.session.products.len(),
                "Tally POS initialized"
            );
        }
        Err(e) => {
            eprintln!("tally-pos: {e}");
            std::process::exit(1);
        }
    }
}
