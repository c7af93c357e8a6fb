//! # Catalog Commands
//!
//! Product listing, keyword filtering, and CRUD. The session keeps an
//! in-memory copy of the catalog; every write goes to the store and
//! then refreshes that copy, so reads never hit the database.

use tracing::{debug, info};

use crate::error::ShellError;
use crate::state::AppContext;
use tally_core::catalog::filter_products;
use tally_core::validation::{validate_price, validate_product_name};
use tally_core::{Product, ProductDraft};

/// Reloads the session's catalog cache from the store.
pub async fn load_products(ctx: &mut AppContext) -> Result<usize, ShellError> {
    let products = ctx.store.products().list_all().await?;
    let count = products.len();
    ctx.session.products = products;

    debug!(count, "Catalog loaded");
    Ok(count)
}

/// Sets the catalog filter keyword.
pub fn set_keyword(ctx: &mut AppContext, keyword: &str) {
    ctx.session.keyword = keyword.to_string();
}

/// The catalog as currently filtered by the session keyword.
pub fn filtered_products(ctx: &AppContext) -> Vec<Product> {
    filter_products(&ctx.session.products, &ctx.session.keyword)
        .into_iter()
        .cloned()
        .collect()
}

/// Validates and persists a new product, then refreshes the cache.
pub async fn create_product(
    ctx: &mut AppContext,
    draft: ProductDraft,
) -> Result<Product, ShellError> {
    draft.validate()?;

    let product = ctx.store.products().insert(&draft).await?;
    info!(id = %product.id, name = %product.name, "Product created");

    load_products(ctx).await?;
    Ok(product)
}

/// Validates and persists an edit to an existing product.
pub async fn update_product(ctx: &mut AppContext, product: Product) -> Result<(), ShellError> {
    validate_product_name(&product.name)?;
    validate_price(product.price_minor)?;

    ctx.store.products().update(&product).await?;
    info!(id = %product.id, "Product updated");

    load_products(ctx).await?;
    Ok(())
}

/// Removes a product from the catalog.
///
/// Cart lines and recorded sales referencing it are snapshots and
/// keep working; only the catalog entry disappears.
pub async fn delete_product(ctx: &mut AppContext, id: &str) -> Result<(), ShellError> {
    ctx.store.products().delete(id).await?;
    info!(id = %id, "Product deleted");

    load_products(ctx).await?;
    Ok(())
}
