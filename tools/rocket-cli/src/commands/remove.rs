//! Remove a product from the cart.

use anyhow::Result;

use super::{report, ItemArgs};
use crate::context::Context;

/// Run the remove command.
pub async fn run(args: ItemArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let result = store.remove_product(args.id).await;
    report(ctx, result, &format!("Removed product {}", args.id))
}
