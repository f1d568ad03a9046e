//! Show the cart.

use anyhow::Result;

use super::{CartView, ShowArgs};
use crate::context::Context;
use crate::output::truncate;

const WIDTHS: [usize; 5] = [6, 28, 6, 14, 14];

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let cart = store.cart();
    let view = CartView::new(&cart, store.config().currency)?;

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header("Cart");

    if view.items.is_empty() {
        ctx.output.info("The cart is empty.");
        ctx.output.info("Run `rocket add <id>` to add a product.");
        return Ok(());
    }

    if !args.totals {
        ctx.output
            .table_row(&["ID", "PRODUCT", "QTY", "PRICE", "SUBTOTAL"], &WIDTHS);
        for line in &view.items {
            let id = line.id.to_string();
            let title = truncate(line.title.as_deref().unwrap_or("-"), WIDTHS[1]);
            let amount = line.amount.to_string();
            let price = line
                .unit_price
                .map_or_else(|| "-".to_string(), |p| p.to_string());
            let subtotal = line.subtotal.to_string();
            ctx.output.table_row(
                &[
                    id.as_str(),
                    title.as_str(),
                    amount.as_str(),
                    price.as_str(),
                    subtotal.as_str(),
                ],
                &WIDTHS,
            );
        }
        println!();
    }

    ctx.output.kv("products", &view.items.len().to_string());
    ctx.output.kv("units", &view.item_count.to_string());
    ctx.output.kv("total", &view.total.to_string());

    Ok(())
}
