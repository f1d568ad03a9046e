//! CLI command implementations.

pub mod add;
pub mod config;
pub mod remove;
pub mod show;
pub mod update;

use anyhow::Result;
use clap::{Args, Subcommand};
use rocket_cart::{CartError, Outcome};
use rocket_commerce::{Cart, Currency, Money, ProductId};
use serde::Serialize;
use thiserror::Error;

use crate::context::Context;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Print only the totals.
    #[arg(long)]
    pub totals: bool,
}

/// Arguments for commands that take a single product.
#[derive(Args)]
pub struct ItemArgs {
    /// Product id.
    pub id: ProductId,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Product id.
    pub id: ProductId,

    /// New amount. Zero or less leaves the cart as it is.
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Where to write the file. A `.json` path writes JSON.
        #[arg(long)]
        path: Option<String>,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// A cart operation failed and its notice has already been shown.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct Rejected(#[from] pub CartError);

/// One cart line as printed.
#[derive(Debug, Serialize)]
pub struct LineView {
    pub id: ProductId,
    pub title: Option<String>,
    pub amount: u32,
    pub unit_price: Option<Money>,
    pub subtotal: Money,
}

/// The whole cart as printed.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<LineView>,
    pub item_count: u64,
    pub total: Money,
}

impl CartView {
    pub fn new(cart: &Cart, currency: Currency) -> Result<Self> {
        let items = cart
            .iter()
            .map(|item| -> Result<LineView> {
                Ok(LineView {
                    id: item.id,
                    title: item.product.title().map(str::to_string),
                    amount: item.amount,
                    unit_price: item.product.unit_price(currency),
                    subtotal: item.subtotal(currency)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            items,
            item_count: cart.item_count(),
            total: cart.subtotal(currency)?,
        })
    }
}

#[derive(Serialize)]
struct OutcomeView {
    applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<u64>,
    cart: CartView,
}

/// Print the result of a mutating command.
///
/// Failures have already been reported through the store's notifier, so they
/// only carry the exit status from here.
pub fn report(ctx: &Context, result: Result<Outcome, CartError>, done: &str) -> Result<()> {
    let outcome = result.map_err(|err| {
        ctx.output.debug(&err.to_string());
        Rejected(err)
    })?;

    let currency = ctx.config.store.currency;
    match &outcome {
        Outcome::Applied(snapshot) => {
            let cart = CartView::new(&snapshot.cart, currency)?;
            if ctx.output.is_json() {
                ctx.output.json(&OutcomeView {
                    applied: true,
                    version: Some(snapshot.version),
                    cart,
                });
            } else {
                ctx.output.success(done);
                ctx.output
                    .kv("items", &format!("{} ({})", cart.item_count, cart.total));
            }
        }
        Outcome::Ignored => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "applied": false }));
            } else {
                ctx.output.info("Nothing to change");
            }
        }
    }
    Ok(())
}
