//! Add a product to the cart.

use anyhow::Result;

use super::{report, ItemArgs};
use crate::context::Context;

/// Run the add command.
pub async fn run(args: ItemArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let result = store.add_product(args.id).await;
    report(ctx, result, &format!("Added product {}", args.id))
}
