//! # First-Run Bootstrap
//!
//! On an empty database the app asks once: start with the bundled
//! sample catalog, or start blank? Either answer writes a marker to
//! the settings collection, so the question never reappears even
//! after the operator deletes every product.

use serde::Deserialize;
use tracing::info;

use crate::commands::catalog::load_products;
use crate::error::ShellError;
use crate::state::AppContext;
use tally_core::{ProductDraft, UserDraft};
use tally_store::FIRST_RUN_KEY;

/// Bundled sample dataset, compiled into the binary.
const SAMPLE_DATA: &str = include_str!("../../data/sample.json");

#[derive(Debug, Deserialize)]
struct SampleData {
    products: Vec<ProductDraft>,
    users: Vec<UserDraft>,
}

/// Whether the first-run question has never been answered.
pub async fn is_first_run(ctx: &AppContext) -> Result<bool, ShellError> {
    let marker = ctx.store.settings().get(FIRST_RUN_KEY).await?;
    Ok(marker.is_none())
}

/// Seeds the store from the bundled sample dataset and marks the
/// first run answered. Returns the number of products seeded.
pub async fn start_with_sample_data(ctx: &mut AppContext) -> Result<usize, ShellError> {
    let sample: SampleData = serde_json::from_str(SAMPLE_DATA)?;

    for draft in &sample.products {
        draft.validate()?;
        ctx.store.products().insert(draft).await?;
    }
    for draft in &sample.users {
        ctx.store.users().insert(draft).await?;
    }

    ctx.store.settings().set(FIRST_RUN_KEY, "1").await?;
    load_products(ctx).await?;

    info!(
        products = sample.products.len(),
        users = sample.users.len(),
        "Sample data loaded"
    );
    Ok(sample.products.len())
}

/// Marks the first run answered without seeding anything.
pub async fn start_blank(ctx: &mut AppContext) -> Result<(), ShellError> {
    ctx.store.settings().set(FIRST_RUN_KEY, "1").await?;
    info!("Starting with an empty catalog");
    Ok(())
}
