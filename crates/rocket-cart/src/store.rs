//! The cart store.

use std::sync::{Arc, Mutex, PoisonError};

use rocket_cache::{Cache, KvBackend};
use rocket_commerce::{Cart, CommerceError, LineItem, ProductId};
use rocket_data::Catalog;
use tokio::sync::watch;
use tracing::instrument;

use crate::config::{StoreConfig, WritePolicy};
use crate::error::CartError;
use crate::notice::{Notice, Notifier, Operation};
use crate::snapshot::{CartSnapshot, Outcome};

/// Owns the cart, checks every change against stock, and mirrors every
/// committed change to durable storage.
///
/// Each operation works from the snapshot current when it was called. Under
/// [`WritePolicy::LastWriteWins`] two overlapping operations both commit and
/// the later one wins wholesale; under [`WritePolicy::CompareAndSwap`] the
/// later one fails with [`CartError::Conflict`].
///
/// Every failure is reported through the notifier and also returned.
pub struct CartStore<C, B> {
    catalog: C,
    cache: Cache<B>,
    notifier: Box<dyn Notifier>,
    config: StoreConfig,
    state: watch::Sender<CartSnapshot>,
    commit_lock: Mutex<()>,
}

impl<C, B> CartStore<C, B>
where
    C: Catalog,
    B: KvBackend,
{
    /// Load the cart stored under `config.storage_key` and build a store.
    ///
    /// A missing or unreadable value starts an empty cart. Backend failures
    /// are returned.
    pub fn open(
        catalog: C,
        cache: Cache<B>,
        notifier: impl Notifier + 'static,
        config: StoreConfig,
    ) -> Result<Self, CartError> {
        let cart = load_cart(&cache, &config.storage_key)?;
        tracing::debug!(
            key = %config.storage_key,
            items = cart.unique_item_count(),
            "cart loaded"
        );

        let (state, _) = watch::channel(CartSnapshot::initial(cart));
        Ok(Self {
            catalog,
            cache,
            notifier: Box::new(notifier),
            config,
            state,
            commit_lock: Mutex::new(()),
        })
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        self.state.borrow().clone()
    }

    /// Current cart.
    pub fn cart(&self) -> Arc<Cart> {
        Arc::clone(&self.state.borrow().cart)
    }

    /// Watch committed snapshots.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.state.subscribe()
    }

    /// Active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The catalog used for lookups.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Add one unit of a product.
    ///
    /// A product already in the cart is incremented in place; a new one is
    /// appended with amount 1 after fetching its attributes.
    #[instrument(skip_all, fields(product_id = %product_id))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<Outcome, CartError> {
        let result = self.try_add(product_id).await;
        self.finish(Operation::Add, product_id, result)
    }

    /// Remove a product's line.
    #[instrument(skip_all, fields(product_id = %product_id))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Outcome, CartError> {
        let result = self.try_remove(product_id);
        self.finish(Operation::Remove, product_id, result)
    }

    /// Set a product's amount.
    ///
    /// Non-positive amounts are ignored without a notice.
    #[instrument(skip_all, fields(product_id = %product_id, amount = amount))]
    pub async fn update_product_amount(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<Outcome, CartError> {
        let result = self.try_update(product_id, amount).await;
        self.finish(Operation::Update, product_id, result)
    }

    async fn try_add(&self, product_id: ProductId) -> Result<Outcome, CartError> {
        let base = self.snapshot();
        let existing = base.cart.get(product_id).map(|item| item.amount);

        let stock = self.catalog.stock(product_id).await?;
        let candidate = u64::from(existing.unwrap_or(0)) + 1;
        stock.check(candidate)?;

        let cart = match existing {
            Some(_) => {
                let amount = u32::try_from(candidate).map_err(|_| CommerceError::Overflow)?;
                base.cart.with_amount(product_id, amount)?
            }
            None => {
                let product = self.catalog.product(product_id).await?;
                base.cart.with_item(LineItem::new(product_id, product))?
            }
        };

        self.commit(&base, cart).map(Outcome::Applied)
    }

    fn try_remove(&self, product_id: ProductId) -> Result<Outcome, CartError> {
        let base = self.snapshot();
        let cart = base.cart.without(product_id)?;
        self.commit(&base, cart).map(Outcome::Applied)
    }

    async fn try_update(&self, product_id: ProductId, amount: i64) -> Result<Outcome, CartError> {
        let Ok(requested) = u64::try_from(amount) else {
            tracing::debug!(amount, "ignoring negative amount");
            return Ok(Outcome::Ignored);
        };
        if requested == 0 {
            tracing::debug!("ignoring zero amount");
            return Ok(Outcome::Ignored);
        }

        let base = self.snapshot();

        let stock = self.catalog.stock(product_id).await?;
        stock.check(requested)?;

        let amount = u32::try_from(requested).map_err(|_| CommerceError::Overflow)?;
        let cart = base.cart.with_amount(product_id, amount)?;

        self.commit(&base, cart).map(Outcome::Applied)
    }

    /// Persist `cart` and publish it as the next snapshot.
    ///
    /// The version check, the durable write and the publish happen under one
    /// lock, so commits are totally ordered. A failed write leaves the
    /// in-memory cart untouched.
    fn commit(&self, base: &CartSnapshot, cart: Cart) -> Result<CartSnapshot, CartError> {
        let _guard = self
            .commit_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let current = self.state.borrow().version;
        if self.config.write_policy == WritePolicy::CompareAndSwap && current != base.version {
            return Err(CartError::Conflict {
                expected: base.version,
                found: current,
            });
        }
        if current != base.version {
            tracing::debug!(
                base = base.version,
                current,
                "overwriting newer cart (last write wins)"
            );
        }

        self.cache.set(&self.config.storage_key, &cart)?;

        let next = CartSnapshot::new(current + 1, Arc::new(cart));
        self.state.send_replace(next.clone());
        tracing::debug!(
            version = next.version,
            items = next.cart.unique_item_count(),
            "cart committed"
        );
        Ok(next)
    }

    fn finish(
        &self,
        operation: Operation,
        product_id: ProductId,
        result: Result<Outcome, CartError>,
    ) -> Result<Outcome, CartError> {
        if let Err(err) = &result {
            let kind = err.notice_kind(operation);
            tracing::debug!(%operation, error = %err, "cart operation rejected");
            self.notifier.notify(&Notice {
                kind,
                product_id,
                message: self.config.messages.text(kind).to_string(),
            });
        }
        result
    }
}

fn load_cart<B: KvBackend>(cache: &Cache<B>, key: &str) -> Result<Cart, CartError> {
    match cache.get::<Cart>(key) {
        Ok(Some(cart)) => Ok(cart),
        Ok(None) => Ok(Cart::new()),
        Err(e) if e.is_corrupt_value() => {
            tracing::warn!(key, error = %e, "stored cart is unreadable, starting empty");
            Ok(Cart::new())
        }
        Err(e) => Err(e.into()),
    }
}
