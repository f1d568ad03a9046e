//! End-to-end behaviour of the cart store against in-memory and file-backed
//! storage.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rocket_cache::{Cache, CacheError, FileBackend, KvBackend, MemoryBackend};
use rocket_cart::{
    CartError, CartStore, Messages, Notice, NoticeKind, Outcome, StoreConfig, WritePolicy,
    DEFAULT_STORAGE_KEY,
};
use rocket_commerce::catalog::{Product, StockRecord};
use rocket_commerce::{Cart, ProductId};
use rocket_data::{FetchError, MemoryCatalog, ProductSource, StockSource};
use serde_json::{json, Value};
use tokio::sync::Notify;

type Notices = Arc<Mutex<Vec<Notice>>>;

fn id(n: u64) -> ProductId {
    ProductId::new(n)
}

fn shoe(title: &str, price: f64) -> Product {
    Product::from_value(json!({
        "title": title,
        "price": price,
        "image": format!("https://cdn.example.com/{title}.jpg"),
    }))
    .unwrap()
}

/// Products 1, 2 and 3 with stock 3, 5 and 1.
fn catalog() -> MemoryCatalog {
    MemoryCatalog::new()
        .with_product(id(1), shoe("runner", 139.9), 3)
        .with_product(id(2), shoe("trail", 179.9), 5)
        .with_product(id(3), shoe("sandal", 59.9), 1)
}

fn recorder() -> (Notices, impl Fn(&Notice) + Send + Sync + 'static) {
    let notices: Notices = Arc::default();
    let sink = Arc::clone(&notices);
    (notices, move |n: &Notice| sink.lock().unwrap().push(n.clone()))
}

fn kinds(notices: &Notices) -> Vec<NoticeKind> {
    notices.lock().unwrap().iter().map(|n| n.kind).collect()
}

fn amounts(cart: &Cart) -> Vec<(u64, u32)> {
    cart.iter().map(|i| (i.id.get(), i.amount)).collect()
}

fn stored(backend: &Arc<MemoryBackend>) -> Option<Value> {
    Cache::new(Arc::clone(backend))
        .get::<Value>(DEFAULT_STORAGE_KEY)
        .unwrap()
}

fn stored_raw(backend: &Arc<MemoryBackend>) -> Option<Vec<u8>> {
    backend.get(DEFAULT_STORAGE_KEY).unwrap()
}

fn open<C: rocket_data::Catalog>(
    catalog: C,
    backend: Arc<MemoryBackend>,
    config: StoreConfig,
) -> (CartStore<C, Arc<MemoryBackend>>, Notices) {
    let (notices, notifier) = recorder();
    let store = CartStore::open(catalog, Cache::new(backend), notifier, config).unwrap();
    (store, notices)
}

#[tokio::test]
async fn test_add_new_product_fetches_attributes() {
    let backend = Arc::new(MemoryBackend::new());
    let (store, notices) = open(catalog(), Arc::clone(&backend), StoreConfig::default());

    let outcome = store.add_product(id(1)).await.unwrap();
    let snapshot = outcome.snapshot().unwrap();
    assert_eq!(snapshot.version, 1);
    assert_eq!(amounts(&snapshot.cart), vec![(1, 1)]);

    let item = snapshot.cart.get(id(1)).unwrap();
    assert_eq!(item.product.title(), Some("runner"));

    let value = stored(&backend).unwrap();
    assert_eq!(value[0]["id"], 1);
    assert_eq!(value[0]["amount"], 1);
    assert_eq!(value[0]["title"], "runner");
    assert_eq!(value[0]["price"], 139.9);

    assert_eq!(store.catalog().stock_lookups(), 1);
    assert_eq!(store.catalog().product_lookups(), 1);
    assert!(notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_existing_product_increments_without_product_lookup() {
    let backend = Arc::new(MemoryBackend::new());
    let (store, _) = open(catalog(), backend, StoreConfig::default());

    store.add_product(id(1)).await.unwrap();
    store.add_product(id(2)).await.unwrap();
    store.add_product(id(1)).await.unwrap();

    assert_eq!(amounts(&store.cart()), vec![(1, 2), (2, 1)]);
    assert_eq!(store.catalog().stock_lookups(), 3);
    assert_eq!(store.catalog().product_lookups(), 2);
}

#[tokio::test]
async fn test_add_beyond_stock_is_rejected() {
    let backend = Arc::new(MemoryBackend::new());
    let (store, notices) = open(catalog(), Arc::clone(&backend), StoreConfig::default());

    store.add_product(id(3)).await.unwrap();
    let before = stored(&backend);

    let err = store.add_product(id(3)).await.unwrap_err();
    assert!(matches!(
        err,
        CartError::OutOfStock {
            requested: 2,
            available: 1,
            ..
        }
    ));
    assert_eq!(amounts(&store.cart()), vec![(3, 1)]);
    assert_eq!(stored(&backend), before);
    assert_eq!(store.snapshot().version, 1);
    assert_eq!(kinds(&notices), vec![NoticeKind::OutOfStock]);
}

#[tokio::test]
async fn test_add_with_zero_stock_never_fetches_product() {
    let catalog = catalog();
    catalog.set_stock(id(2), 0);
    let (store, notices) = open(catalog, Arc::new(MemoryBackend::new()), StoreConfig::default());

    assert!(store.add_product(id(2)).await.is_err());
    assert!(store.cart().is_empty());
    assert_eq!(store.catalog().product_lookups(), 0);
    assert_eq!(kinds(&notices), vec![NoticeKind::OutOfStock]);
}

#[tokio::test]
async fn test_add_lookup_failure_leaves_cart_unchanged() {
    let backend = Arc::new(MemoryBackend::new());
    let (store, notices) = open(catalog(), Arc::clone(&backend), StoreConfig::default());
    store.add_product(id(2)).await.unwrap();
    let before = stored(&backend);

    store.catalog().fail(id(1));
    let err = store.add_product(id(1)).await.unwrap_err();
    assert!(matches!(err, CartError::Lookup(FetchError::Connection(_))));

    assert_eq!(amounts(&store.cart()), vec![(2, 1)]);
    assert_eq!(stored(&backend), before);

    let notices = notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::AddFailed);
    assert_eq!(notices[0].product_id, id(1));
    assert_eq!(notices[0].message, "Failed to add product");
}

#[tokio::test]
async fn test_add_unknown_product_reports_generic_failure() {
    let (store, notices) = open(
        catalog(),
        Arc::new(MemoryBackend::new()),
        StoreConfig::default(),
    );

    let err = store.add_product(id(99)).await.unwrap_err();
    assert!(matches!(
        err,
        CartError::Lookup(FetchError::Missing { resource: "stock", id: 99 })
    ));
    assert_eq!(kinds(&notices), vec![NoticeKind::AddFailed]);
}

#[tokio::test]
async fn test_remove_keeps_order_of_remaining_items() {
    let backend = Arc::new(MemoryBackend::new());
    let (store, notices) = open(catalog(), Arc::clone(&backend), StoreConfig::default());
    for n in [1, 2, 3] {
        store.add_product(id(n)).await.unwrap();
    }

    store.remove_product(id(2)).await.unwrap();
    assert_eq!(amounts(&store.cart()), vec![(1, 1), (3, 1)]);

    let value = stored(&backend).unwrap();
    let ids: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_absent_product() {
    let backend = Arc::new(MemoryBackend::new());
    let (store, notices) = open(catalog(), Arc::clone(&backend), StoreConfig::default());
    store.add_product(id(1)).await.unwrap();
    let before = stored(&backend);

    let err = store.remove_product(id(2)).await.unwrap_err();
    assert!(matches!(err, CartError::NotFound(p) if p == id(2)));
    assert_eq!(amounts(&store.cart()), vec![(1, 1)]);
    assert_eq!(stored(&backend), before);
    assert_eq!(kinds(&notices), vec![NoticeKind::RemoveFailed]);
}

#[tokio::test]
async fn test_remove_makes_no_lookups() {
    let (store, _) = open(
        catalog(),
        Arc::new(MemoryBackend::new()),
        StoreConfig::default(),
    );
    store.add_product(id(1)).await.unwrap();
    store.catalog().fail(id(1));

    store.remove_product(id(1)).await.unwrap();
    assert!(store.cart().is_empty());
    assert_eq!(store.catalog().stock_lookups(), 1);
}

#[tokio::test]
async fn test_update_sets_exact_amount() {
    let (store, notices) = open(
        catalog(),
        Arc::new(MemoryBackend::new()),
        StoreConfig::default(),
    );
    store.add_product(id(2)).await.unwrap();

    store.update_product_amount(id(2), 4).await.unwrap();
    assert_eq!(amounts(&store.cart()), vec![(2, 4)]);

    store.update_product_amount(id(2), 2).await.unwrap();
    assert_eq!(amounts(&store.cart()), vec![(2, 2)]);

    // Setting the same amount still commits.
    let outcome = store.update_product_amount(id(2), 2).await.unwrap();
    assert_eq!(outcome.snapshot().unwrap().version, 4);
    assert!(notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_non_positive_is_ignored_silently() {
    let backend = Arc::new(MemoryBackend::new());
    let (store, notices) = open(catalog(), Arc::clone(&backend), StoreConfig::default());
    store.add_product(id(1)).await.unwrap();
    let raw_before = stored_raw(&backend);

    for amount in [0, -1, i64::MIN] {
        let outcome = store.update_product_amount(id(1), amount).await.unwrap();
        assert_eq!(outcome, Outcome::Ignored);
    }

    let raw_after = stored_raw(&backend);
    assert_eq!(raw_before, raw_after);
    assert_eq!(store.snapshot().version, 1);
    assert_eq!(store.catalog().stock_lookups(), 1);
    assert!(notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_beyond_stock_is_rejected() {
    let (store, notices) = open(
        catalog(),
        Arc::new(MemoryBackend::new()),
        StoreConfig::default(),
    );
    store.add_product(id(1)).await.unwrap();

    let err = store.update_product_amount(id(1), 4).await.unwrap_err();
    assert!(matches!(
        err,
        CartError::OutOfStock {
            requested: 4,
            available: 3,
            ..
        }
    ));
    assert_eq!(amounts(&store.cart()), vec![(1, 1)]);
    assert_eq!(kinds(&notices), vec![NoticeKind::OutOfStock]);

    // The ceiling itself is allowed.
    store.update_product_amount(id(1), 3).await.unwrap();
    assert_eq!(amounts(&store.cart()), vec![(1, 3)]);
}

#[tokio::test]
async fn test_update_product_not_in_cart() {
    let backend = Arc::new(MemoryBackend::new());
    let (store, notices) = open(catalog(), Arc::clone(&backend), StoreConfig::default());

    let err = store.update_product_amount(id(2), 1).await.unwrap_err();
    assert!(matches!(err, CartError::NotFound(p) if p == id(2)));
    assert!(store.cart().is_empty());
    assert_eq!(stored(&backend), None);
    assert_eq!(kinds(&notices), vec![NoticeKind::UpdateFailed]);
}

#[tokio::test]
async fn test_update_lookup_failure() {
    let (store, notices) = open(
        catalog(),
        Arc::new(MemoryBackend::new()),
        StoreConfig::default(),
    );
    store.add_product(id(1)).await.unwrap();
    store.catalog().fail(id(1));

    let err = store.update_product_amount(id(1), 2).await.unwrap_err();
    assert!(matches!(err, CartError::Lookup(_)));
    assert_eq!(amounts(&store.cart()), vec![(1, 1)]);
    assert_eq!(kinds(&notices), vec![NoticeKind::UpdateFailed]);
}

#[tokio::test]
async fn test_update_above_u32_is_out_of_stock() {
    let (store, notices) = open(
        catalog(),
        Arc::new(MemoryBackend::new()),
        StoreConfig::default(),
    );
    store.add_product(id(1)).await.unwrap();

    let err = store
        .update_product_amount(id(1), i64::from(u32::MAX) + 1)
        .await
        .unwrap_err();
    assert!(matches!(err, CartError::OutOfStock { .. }));
    assert_eq!(kinds(&notices), vec![NoticeKind::OutOfStock]);
}

#[tokio::test]
async fn test_stored_cart_matches_live_cart_after_each_step() {
    let backend = Arc::new(MemoryBackend::new());
    let (store, notices) = open(catalog(), Arc::clone(&backend), StoreConfig::default());
    let cache = Cache::new(Arc::clone(&backend));

    let in_sync = || {
        let kept = cache.get::<Cart>(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(kept, *store.cart());
    };

    store.add_product(id(1)).await.unwrap();
    in_sync();
    store.add_product(id(1)).await.unwrap();
    in_sync();
    store.add_product(id(2)).await.unwrap();
    in_sync();
    store.update_product_amount(id(2), 4).await.unwrap();
    in_sync();
    store.remove_product(id(1)).await.unwrap();
    in_sync();

    let kept = cache.get::<Cart>(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(kept, *store.cart());
    assert_eq!(amounts(&kept), vec![(2, 4)]);

    let item = kept.get(id(2)).unwrap();
    assert_eq!(item.product.title(), Some("trail"));
    assert_eq!(item.product.price(), Some(179.9));
    assert!(notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_cart_survives_reopen() {
    let backend = Arc::new(MemoryBackend::new());
    {
        let (store, _) = open(catalog(), Arc::clone(&backend), StoreConfig::default());
        store.add_product(id(1)).await.unwrap();
        store.add_product(id(1)).await.unwrap();
        store.add_product(id(2)).await.unwrap();
    }

    let (store, _) = open(catalog(), backend, StoreConfig::default());
    let snapshot = store.snapshot();
    assert_eq!(snapshot.version, 0);
    assert_eq!(amounts(&snapshot.cart), vec![(1, 2), (2, 1)]);
    assert_eq!(snapshot.cart.get(id(2)).unwrap().product.title(), Some("trail"));
}

#[tokio::test]
async fn test_file_backend_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    {
        let cache = Cache::new(FileBackend::open(dir.path()).unwrap());
        let store =
            CartStore::open(catalog(), cache, |_: &Notice| {}, StoreConfig::default()).unwrap();
        store.add_product(id(3)).await.unwrap();
        store.add_product(id(1)).await.unwrap();
        store.update_product_amount(id(1), 3).await.unwrap();
    }

    let cache = Cache::new(FileBackend::open(dir.path()).unwrap());
    let store = CartStore::open(catalog(), cache, |_: &Notice| {}, StoreConfig::default()).unwrap();
    assert_eq!(amounts(&store.cart()), vec![(3, 1), (1, 3)]);
}

#[tokio::test]
async fn test_open_accepts_existing_storage_format() {
    let backend = Arc::new(MemoryBackend::new());
    backend
        .set(
            DEFAULT_STORAGE_KEY,
            br#"[{"id":7,"title":"Tenis","price":99.9,"image":"a.jpg","amount":2}]"#,
        )
        .unwrap();

    let catalog = catalog().with_product(id(7), shoe("tenis", 99.9), 5);
    let (store, _) = open(catalog, backend, StoreConfig::default());
    assert_eq!(amounts(&store.cart()), vec![(7, 2)]);

    store.add_product(id(7)).await.unwrap();
    assert_eq!(amounts(&store.cart()), vec![(7, 3)]);
    // Stored attributes are kept; the product is not re-fetched.
    assert_eq!(store.cart().get(id(7)).unwrap().product.title(), Some("Tenis"));
    assert_eq!(store.catalog().product_lookups(), 0);
}

#[tokio::test]
async fn test_unreadable_storage_starts_empty() {
    let cases: [&[u8]; 3] = [
        b"not json",
        br#"{"id": 1}"#,
        br#"[{"id":1,"amount":1},{"id":1,"amount":2}]"#,
    ];
    for raw in cases {
        let backend = Arc::new(MemoryBackend::new());
        backend.set(DEFAULT_STORAGE_KEY, raw).unwrap();

        let (store, _) = open(catalog(), Arc::clone(&backend), StoreConfig::default());
        assert!(store.cart().is_empty());

        store.add_product(id(1)).await.unwrap();
        assert_eq!(stored(&backend).unwrap()[0]["id"], 1);
    }
}

#[tokio::test]
async fn test_custom_storage_key() {
    let backend = Arc::new(MemoryBackend::new());
    let config = StoreConfig::default().with_storage_key("cart:alice");
    let (store, _) = open(catalog(), Arc::clone(&backend), config);

    store.add_product(id(1)).await.unwrap();
    assert_eq!(backend.keys().unwrap(), vec!["cart:alice".to_string()]);
}

#[tokio::test]
async fn test_custom_messages() {
    let config = StoreConfig::default().with_messages(Messages::pt_br());
    let (store, notices) = open(catalog(), Arc::new(MemoryBackend::new()), config);

    store.remove_product(id(1)).await.unwrap_err();
    assert_eq!(
        notices.lock().unwrap()[0].message,
        "Erro na remoção do produto"
    );
}

#[tokio::test]
async fn test_subscribers_see_commits_only() {
    let (store, _) = open(
        catalog(),
        Arc::new(MemoryBackend::new()),
        StoreConfig::default(),
    );
    let mut rx = store.subscribe();
    assert_eq!(rx.borrow().version, 0);

    store.add_product(id(1)).await.unwrap();
    assert!(rx.has_changed().unwrap());
    let seen = rx.borrow_and_update().clone();
    assert_eq!(seen.version, 1);
    assert_eq!(amounts(&seen.cart), vec![(1, 1)]);

    store.update_product_amount(id(1), 0).await.unwrap();
    store.remove_product(id(2)).await.unwrap_err();
    assert!(!rx.has_changed().unwrap());
}

/// Fails every write while `failing` is set.
#[derive(Default)]
struct FlakyBackend {
    inner: MemoryBackend,
    failing: AtomicBool,
}

impl KvBackend for FlakyBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CacheError::StoreError("disk full".to_string()));
        }
        self.inner.set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.inner.delete(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.inner.keys()
    }
}

#[tokio::test]
async fn test_failed_write_leaves_cart_unchanged() {
    let backend = Arc::new(FlakyBackend::default());
    let (notices, notifier) = recorder();
    let store = CartStore::open(
        catalog(),
        Cache::new(Arc::clone(&backend)),
        notifier,
        StoreConfig::default(),
    )
    .unwrap();
    store.add_product(id(1)).await.unwrap();

    backend.failing.store(true, Ordering::SeqCst);
    let err = store.add_product(id(2)).await.unwrap_err();
    assert!(matches!(err, CartError::Storage(_)));
    let err = store.remove_product(id(1)).await.unwrap_err();
    assert!(matches!(err, CartError::Storage(_)));

    assert_eq!(amounts(&store.cart()), vec![(1, 1)]);
    assert_eq!(store.snapshot().version, 1);
    assert_eq!(
        kinds(&notices),
        vec![NoticeKind::AddFailed, NoticeKind::RemoveFailed]
    );

    backend.failing.store(false, Ordering::SeqCst);
    store.add_product(id(2)).await.unwrap();
    assert_eq!(amounts(&store.cart()), vec![(1, 1), (2, 1)]);
}

/// Holds stock lookups for one product until released.
struct GatedCatalog {
    inner: MemoryCatalog,
    gated: ProductId,
    gate: Notify,
}

#[async_trait]
impl StockSource for GatedCatalog {
    async fn stock(&self, id: ProductId) -> Result<StockRecord, FetchError> {
        if id == self.gated {
            self.gate.notified().await;
        }
        self.inner.stock(id).await
    }
}

#[async_trait]
impl ProductSource for GatedCatalog {
    async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.inner.product(id).await
    }
}

/// Starts an add of product 1 from a cart holding products 1 and 2, commits
/// a removal of product 2 while the add waits on stock, then lets the add
/// finish.
async fn overlapping_add_and_remove(
    policy: WritePolicy,
) -> (
    CartStore<GatedCatalog, Arc<MemoryBackend>>,
    Result<Outcome, CartError>,
    Notices,
) {
    let backend = Arc::new(MemoryBackend::new());
    {
        let (seed, _) = open(catalog(), Arc::clone(&backend), StoreConfig::default());
        seed.add_product(id(1)).await.unwrap();
        seed.add_product(id(2)).await.unwrap();
    }

    let gated = GatedCatalog {
        inner: catalog(),
        gated: id(1),
        gate: Notify::new(),
    };
    let config = StoreConfig::default().with_write_policy(policy);
    let (store, notices) = open(gated, backend, config);

    let (added, removed) = futures::join!(store.add_product(id(1)), async {
        let removed = store.remove_product(id(2)).await;
        store.catalog().gate.notify_one();
        removed
    });
    removed.unwrap();
    (store, added, notices)
}

#[tokio::test]
async fn test_last_write_wins_overwrites_concurrent_commit() {
    let (store, added, notices) = overlapping_add_and_remove(WritePolicy::LastWriteWins).await;

    let snapshot = added.unwrap().snapshot().cloned().unwrap();
    assert_eq!(snapshot.version, 2);
    // The add worked from the pre-removal cart, so product 2 is back.
    assert_eq!(amounts(&snapshot.cart), vec![(1, 2), (2, 1)]);
    assert_eq!(store.snapshot(), snapshot);
    assert!(notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_compare_and_swap_rejects_stale_commit() {
    let (store, added, notices) = overlapping_add_and_remove(WritePolicy::CompareAndSwap).await;

    let err = added.unwrap_err();
    assert!(matches!(
        err,
        CartError::Conflict {
            expected: 0,
            found: 1
        }
    ));
    assert_eq!(amounts(&store.cart()), vec![(1, 1)]);
    assert_eq!(store.snapshot().version, 1);
    assert_eq!(kinds(&notices), vec![NoticeKind::AddFailed]);
}

#[tokio::test]
async fn test_sequential_walkthrough() {
    let (store, notices) = open(
        catalog(),
        Arc::new(MemoryBackend::new()),
        StoreConfig::default(),
    );

    store.add_product(id(1)).await.unwrap();
    store.add_product(id(1)).await.unwrap();
    store.add_product(id(1)).await.unwrap();
    store.add_product(id(1)).await.unwrap_err();
    store.add_product(id(2)).await.unwrap();
    store.update_product_amount(id(2), 5).await.unwrap();
    store.remove_product(id(1)).await.unwrap();
    store.update_product_amount(id(1), 1).await.unwrap_err();

    let cart = store.cart();
    assert_eq!(amounts(&cart), vec![(2, 5)]);
    assert_eq!(cart.item_count(), 5);
    assert_eq!(
        cart.subtotal(store.config().currency).unwrap().amount_cents,
        89_950
    );
    assert_eq!(
        kinds(&notices),
        vec![NoticeKind::OutOfStock, NoticeKind::UpdateFailed]
    );
}

#[tokio::test]
async fn test_add_at_ceiling_from_stored_cart() {
    let backend = Arc::new(MemoryBackend::new());
    backend
        .set(DEFAULT_STORAGE_KEY, br#"[{"id":1,"amount":2}]"#)
        .unwrap();
    let catalog = MemoryCatalog::new().with_product(id(1), shoe("runner", 139.9), 2);
    let (store, notices) = open(catalog, Arc::clone(&backend), StoreConfig::default());

    let err = store.add_product(id(1)).await.unwrap_err();
    assert!(matches!(err, CartError::OutOfStock { .. }));
    assert_eq!(amounts(&store.cart()), vec![(1, 2)]);
    assert_eq!(
        stored_raw(&backend).unwrap(),
        br#"[{"id":1,"amount":2}]"#.to_vec()
    );
    assert_eq!(kinds(&notices), vec![NoticeKind::OutOfStock]);
}

#[tokio::test]
async fn test_add_to_empty_cart_stores_product_attributes() {
    let backend = Arc::new(MemoryBackend::new());
    let product = Product::from_value(json!({ "name": "Shoe" })).unwrap();
    let catalog = MemoryCatalog::new().with_product(id(5), product, 10);
    let (store, _) = open(catalog, Arc::clone(&backend), StoreConfig::default());

    store.add_product(id(5)).await.unwrap();
    assert_eq!(
        stored(&backend).unwrap(),
        json!([{ "id": 5, "name": "Shoe", "amount": 1 }])
    );
}
