//! Cart and line item types.
//!
//! A [`Cart`] is an immutable value: every edit returns a new cart and leaves
//! the original untouched, so a caller holding a snapshot never sees it change
//! underneath them.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Serialized as a bare JSON array of line items. Insertion order is kept for
/// display and carries no other meaning. Deserializing a sequence that repeats
/// a product id or holds a zero amount fails.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from line items, enforcing one line per product.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, CommerceError> {
        let mut cart = Self::new();
        for item in items {
            cart.validate_new(&item)?;
            cart.items.push(item);
        }
        Ok(cart)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over line items.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Get a line item by product id.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == product_id)
    }

    /// Check whether the cart holds a product.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Current amount of a product, zero when absent.
    pub fn amount_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map_or(0, |i| i.amount)
    }

    /// Get total item count (sum of amounts).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.amount)).sum()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Return a copy with `item` appended.
    pub fn with_item(&self, item: LineItem) -> Result<Cart, CommerceError> {
        self.validate_new(&item)?;
        let mut items = self.items.clone();
        items.push(item);
        Ok(Self { items })
    }

    /// Return a copy with the product's amount set in place.
    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Result<Cart, CommerceError> {
        if amount == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }

        let mut items = self.items.clone();
        let item = items
            .iter_mut()
            .find(|i| i.id == product_id)
            .ok_or(CommerceError::ItemNotInCart(product_id))?;
        item.amount = amount;
        Ok(Self { items })
    }

    /// Return a copy without the product. Other items keep their order.
    pub fn without(&self, product_id: ProductId) -> Result<Cart, CommerceError> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == product_id)
            .ok_or(CommerceError::ItemNotInCart(product_id))?;

        let mut items = self.items.clone();
        items.remove(index);
        Ok(Self { items })
    }

    /// Sum of line subtotals. Items without a numeric price count as zero.
    pub fn subtotal(&self, currency: Currency) -> Result<Money, CommerceError> {
        let lines = self
            .items
            .iter()
            .map(|i| i.subtotal(currency))
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(lines.iter(), currency).ok_or(CommerceError::Overflow)
    }

    fn validate_new(&self, item: &LineItem) -> Result<(), CommerceError> {
        if item.amount == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        if self.contains(item.id) {
            return Err(CommerceError::DuplicateItem(item.id));
        }
        Ok(())
    }
}

impl TryFrom<Vec<LineItem>> for Cart {
    type Error = CommerceError;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product id.
    pub id: ProductId,
    /// Product display attributes (denormalized when the line was created).
    #[serde(flatten)]
    pub product: Product,
    /// Quantity, at least one.
    pub amount: u32,
}

impl LineItem {
    /// Create a new line item with amount 1.
    pub fn new(id: ProductId, product: Product) -> Self {
        Self {
            id,
            product,
            amount: 1,
        }
    }

    /// Unit price times amount. Zero when the product has no price.
    pub fn subtotal(&self, currency: Currency) -> Result<Money, CommerceError> {
        let unit = self
            .product
            .unit_price(currency)
            .unwrap_or_else(|| Money::zero(currency));
        unit.try_multiply(i64::from(self.amount))
            .ok_or(CommerceError::Overflow)
    }
}
