//! Set the amount of a product in the cart.

use anyhow::Result;

use super::{report, UpdateArgs};
use crate::context::Context;

/// Run the update command.
pub async fn run(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let result = store.update_product_amount(args.id, args.amount).await;
    report(
        ctx,
        result,
        &format!("Set product {} to {}", args.id, args.amount),
    )
}
