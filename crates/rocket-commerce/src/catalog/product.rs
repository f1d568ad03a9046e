//! Product display attributes.

use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys owned by the cart line rather than by the product.
const RESERVED_KEYS: [&str; 2] = ["id", "amount"];

/// Display attributes of a catalog product.
///
/// The cart does not interpret these: whatever the product endpoint returns
/// (title, price, image, anything else) is carried through to storage as-is.
/// The `id` and `amount` keys are stripped because the line item owns them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Product {
    attributes: Map<String, Value>,
}

impl Product {
    /// Create a product from an attribute map.
    pub fn new(mut attributes: Map<String, Value>) -> Self {
        for key in RESERVED_KEYS {
            attributes.remove(key);
        }
        Self { attributes }
    }

    /// Create a product from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, CommerceError> {
        match value {
            Value::Object(map) => Ok(Self::new(map)),
            other => Err(CommerceError::InvalidProduct(format!(
                "expected an object, got {}",
                json_type(&other)
            ))),
        }
    }

    /// Look up a raw attribute.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// All attributes.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Display title (`title`, falling back to `name`).
    pub fn title(&self) -> Option<&str> {
        self.attributes
            .get("title")
            .or_else(|| self.attributes.get("name"))
            .and_then(Value::as_str)
    }

    /// Unit price as a decimal, if the product carries a numeric `price`.
    pub fn price(&self) -> Option<f64> {
        self.attributes.get("price").and_then(Value::as_f64)
    }

    /// Unit price converted to money.
    pub fn unit_price(&self, currency: Currency) -> Option<Money> {
        self.price().map(|p| Money::from_decimal(p, currency))
    }

    /// Image URL.
    pub fn image(&self) -> Option<&str> {
        self.attributes.get("image").and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Product {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(map)
    }
}

impl From<Product> for Map<String, Value> {
    fn from(product: Product) -> Self {
        product.attributes
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
