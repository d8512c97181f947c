//! Shopping cart ledger.
//!
//! The cart is an ordered list of line items (product id, name and price
//! snapshot, quantity) persisted as one JSON blob under a single key in
//! client-local storage. There is no server-side cart.
//!
//! # Invariants
//!
//! - At most one line item per product id.
//! - Every quantity is at least 1; a change that would drive a quantity to
//!   zero or below removes the line instead.
//! - Line order is first-added order and never changes on quantity edits.
//! - Name and price are copied when the product is first added and are never
//!   refreshed from the catalog.
//!
//! # Layers
//!
//! [`Cart`] holds the pure state transitions. [`CartModel`] wraps a
//! [`CartStorage`] and performs the load-mutate-save cycle for every
//! operation, returning a [`CartUpdate`] so callers can re-render each view
//! that depends on cart state before handing control back to the shopper.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{MAX_PRICE, ProductId, is_valid_price};

/// Well-known storage key holding the serialized cart.
pub const CART_KEY: &str = "simpleStoreCart";

/// One entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLineItem {
    /// Price multiplied by quantity, saturating at `Decimal::MAX`.
    ///
    /// Lines decoded by [`Cart::from_blob`] never saturate.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }

    fn checked_line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// The product snapshot handed to [`Cart::add`].
///
/// Deserialization rejects prices outside `0..=MAX_PRICE`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(deserialize_with = "bounded_price")]
    pub price: Decimal,
}

fn bounded_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let price = <Decimal as Deserialize>::deserialize(deserializer)?;
    if is_valid_price(price) {
        Ok(price)
    } else {
        Err(serde::de::Error::custom(format!(
            "price {price} is outside 0..={MAX_PRICE}"
        )))
    }
}

/// Result of [`Cart::change_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// No line matched the id; nothing changed.
    Missing,
    /// The line now has this quantity.
    Updated(u32),
    /// The quantity fell to zero or below and the line was removed.
    Removed,
}

/// Errors decoding a persisted cart blob.
#[derive(Debug, thiserror::Error)]
pub enum CartDecodeError {
    #[error("cart blob is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("cart blob lists product {0} more than once")]
    DuplicateLine(ProductId),
    #[error("cart blob has a zero quantity for product {0}")]
    ZeroQuantity(ProductId),
    #[error("cart blob has an out-of-range price for product {0}")]
    PriceOutOfRange(ProductId),
    #[error("cart blob total overflows")]
    TotalOverflow,
}

/// Errors writing a cart blob to storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartStorageError {
    #[error("cart needs {size} bytes of storage but only {limit} are available")]
    TooLarge { size: usize, limit: usize },
}

/// Ordered sequence of line items.
///
/// Serializes as a bare JSON array of [`CartLineItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Line items in first-added order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Sum of quantities across all line items. Zero for an empty cart.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of all line totals, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(CartLineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Sum of all line totals, or `None` if it does not fit in a `Decimal`.
    #[must_use]
    pub fn checked_total(&self) -> Option<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |total, item| {
            total.checked_add(item.checked_line_total()?)
        })
    }

    /// Add one unit of a product.
    ///
    /// An existing line gets its quantity bumped by exactly one and keeps its
    /// original name and price; otherwise a new line is appended.
    pub fn add(&mut self, product: CartProduct) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartLineItem {
                id: product.id,
                name: product.name,
                price: product.price,
                quantity: 1,
            });
        }
    }

    /// Remove the line for a product. Returns whether a line was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Apply `delta` to a line's quantity.
    ///
    /// A resulting quantity of zero or below removes the line. Other lines are
    /// left untouched.
    pub fn change_quantity(&mut self, id: ProductId, delta: i64) -> QuantityChange {
        let Some(position) = self.items.iter().position(|item| item.id == id) else {
            return QuantityChange::Missing;
        };

        let next = self
            .items
            .get(position)
            .map_or(0, |item| i64::from(item.quantity).saturating_add(delta));

        if next <= 0 {
            self.items.remove(position);
            return QuantityChange::Removed;
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        if let Some(item) = self.items.get_mut(position) {
            item.quantity = quantity;
        }
        QuantityChange::Updated(quantity)
    }

    /// Decode a persisted blob, rejecting data that breaks the cart invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CartDecodeError`] if the blob is not a JSON array of line
    /// items, repeats a product id, holds a zero quantity or a price outside
    /// `0..=MAX_PRICE`, or its total overflows.
    pub fn from_blob(blob: &str) -> Result<Self, CartDecodeError> {
        let cart: Self = serde_json::from_str(blob)?;

        let mut seen = HashSet::with_capacity(cart.items.len());
        for item in &cart.items {
            if item.quantity == 0 {
                return Err(CartDecodeError::ZeroQuantity(item.id));
            }
            if !is_valid_price(item.price) {
                return Err(CartDecodeError::PriceOutOfRange(item.id));
            }
            if !seen.insert(item.id) {
                return Err(CartDecodeError::DuplicateLine(item.id));
            }
        }

        if cart.checked_total().is_none() {
            return Err(CartDecodeError::TotalOverflow);
        }

        Ok(cart)
    }

    /// Encode the cart as its persisted JSON blob.
    #[must_use]
    pub fn to_blob(&self) -> String {
        // Plain strings, integers and finite decimals always serialize.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("[]"))
    }
}

/// Key-value store the cart blob is persisted in.
///
/// The storefront implements this over a browser cookie; tests use
/// [`MemoryCartStorage`].
pub trait CartStorage {
    /// Read the blob stored under `key`.
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CartStorageError::TooLarge`] if the blob does not fit. The
    /// previous blob is then left in place.
    fn write(&mut self, key: &str, blob: String) -> Result<(), CartStorageError>;
}

impl<T: CartStorage + ?Sized> CartStorage for &mut T {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, blob: String) -> Result<(), CartStorageError> {
        (**self).write(key, blob)
    }
}

/// In-process [`CartStorage`] backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStorage {
    entries: HashMap<String, String>,
    limit: Option<usize>,
}

impl MemoryCartStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.into(), blob.into());
        storage
    }

    /// Create an empty storage that refuses blobs longer than `limit` bytes.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: HashMap::new(),
            limit: Some(limit),
        }
    }
}

impl CartStorage for MemoryCartStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, blob: String) -> Result<(), CartStorageError> {
        if let Some(limit) = self.limit.filter(|limit| blob.len() > *limit) {
            return Err(CartStorageError::TooLarge {
                size: blob.len(),
                limit,
            });
        }
        self.entries.insert(key.to_owned(), blob);
        Ok(())
    }
}

/// Cart state after a [`CartModel`] operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartUpdate {
    /// The cart as persisted (or as loaded, when nothing was written).
    pub cart: Cart,
    /// Recomputed badge count.
    pub count: u64,
    /// Whether the operation wrote to storage.
    pub persisted: bool,
}

/// Cart operations over an injected [`CartStorage`].
///
/// Every operation loads the current blob, applies one transition and writes
/// the full cart back. A missing or unreadable blob loads as an empty cart.
/// A write the storage refuses fails the operation and leaves the stored
/// cart unchanged.
#[derive(Debug)]
pub struct CartModel<S> {
    storage: S,
    key: String,
}

impl<S: CartStorage> CartModel<S> {
    /// Create a model over `storage` using the default [`CART_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, CART_KEY)
    }

    /// Create a model over `storage` using a custom key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The storage key this model reads and writes.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the current cart, falling back to empty if absent or corrupt.
    #[must_use]
    pub fn load(&self) -> Cart {
        self.try_load().unwrap_or_default()
    }

    /// Load the current cart, reporting a corrupt blob instead of hiding it.
    ///
    /// # Errors
    ///
    /// Returns [`CartDecodeError`] if a blob is present but cannot be decoded.
    pub fn try_load(&self) -> Result<Cart, CartDecodeError> {
        self.storage
            .read(&self.key)
            .map_or_else(|| Ok(Cart::new()), |blob| Cart::from_blob(&blob))
    }

    /// Persist the full cart and return the recomputed badge count.
    ///
    /// # Errors
    ///
    /// Returns [`CartStorageError`] if the storage refuses the blob.
    pub fn save(&mut self, cart: &Cart) -> Result<u64, CartStorageError> {
        self.storage.write(&self.key, cart.to_blob())?;
        Ok(cart.count())
    }

    /// Add one unit of a product snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CartStorageError`] if the grown cart no longer fits.
    pub fn add(&mut self, product: CartProduct) -> Result<CartUpdate, CartStorageError> {
        let mut cart = self.load();
        cart.add(product);
        self.persist(cart)
    }

    /// Remove the line for a product.
    ///
    /// # Errors
    ///
    /// Returns [`CartStorageError`] if the storage refuses the write.
    pub fn remove(&mut self, id: ProductId) -> Result<CartUpdate, CartStorageError> {
        let mut cart = self.load();
        cart.remove(id);
        self.persist(cart)
    }

    /// Apply `delta` to a line's quantity. Unknown ids leave storage untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CartStorageError`] if the storage refuses the write.
    pub fn change_quantity(
        &mut self,
        id: ProductId,
        delta: i64,
    ) -> Result<CartUpdate, CartStorageError> {
        let mut cart = self.load();
        match cart.change_quantity(id, delta) {
            QuantityChange::Missing => {
                let count = cart.count();
                Ok(CartUpdate {
                    cart,
                    count,
                    persisted: false,
                })
            }
            QuantityChange::Updated(_) | QuantityChange::Removed => self.persist(cart),
        }
    }

    /// Badge count for the current cart.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.load().count()
    }

    /// Borrow the underlying storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the model and return the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self, cart: Cart) -> Result<CartUpdate, CartStorageError> {
        let count = self.save(&cart)?;
        Ok(CartUpdate {
            cart,
            count,
            persisted: true,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: i64) -> CartProduct {
        CartProduct {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::from(price),
        }
    }

    fn model() -> CartModel<MemoryCartStorage> {
        CartModel::new(MemoryCartStorage::new())
    }

    #[test]
    fn test_add_same_product_twice_increments_quantity() {
        let mut model = model();
        model.add(product(1, "A", 10)).unwrap();
        let update = model.add(product(1, "A", 10)).unwrap();

        assert_eq!(update.count, 2);
        assert_eq!(
            model.load().items(),
            &[CartLineItem {
                id: ProductId::new(1),
                name: "A".to_string(),
                price: Decimal::from(10),
                quantity: 2,
            }]
        );
        assert_eq!(model.count(), 2);
    }

    #[test]
    fn test_add_keeps_snapshot_name_and_price() {
        let mut model = model();
        model.add(product(1, "Old name", 10)).unwrap();
        model.add(product(1, "New name", 99)).unwrap();

        let cart = model.load();
        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.name, "Old name");
        assert_eq!(line.price, Decimal::from(10));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_add_appends_in_first_added_order() {
        let mut model = model();
        model.add(product(3, "C", 1)).unwrap();
        model.add(product(1, "A", 1)).unwrap();
        model.add(product(3, "C", 1)).unwrap();
        model.change_quantity(ProductId::new(1), 4).unwrap();

        let ids: Vec<i64> = model.load().items().iter().map(|i| i.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let storage = MemoryCartStorage::with_entry(
            CART_KEY,
            r#"[{"id":1,"name":"A","price":10,"quantity":1}]"#,
        );
        let mut model = CartModel::new(storage);

        let update = model.change_quantity(ProductId::new(1), -1).unwrap();

        assert!(update.persisted);
        assert!(update.cart.is_empty());
        assert_eq!(update.count, 0);
        assert!(model.load().is_empty());
    }

    #[test]
    fn test_large_negative_delta_removes_instead_of_clamping() {
        let mut cart = Cart::new();
        cart.add(product(1, "A", 5));
        cart.add(product(2, "B", 5));

        assert_eq!(cart.change_quantity(ProductId::new(1), -50), QuantityChange::Removed);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id, ProductId::new(2));
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_positive_change_leaves_other_lines_alone() {
        let mut cart = Cart::new();
        cart.add(product(1, "A", 5));
        cart.add(product(2, "B", 7));
        let untouched = cart.items()[1].clone();

        assert_eq!(cart.change_quantity(ProductId::new(1), 3), QuantityChange::Updated(4));
        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.items()[1], untouched);
    }

    #[test]
    fn test_change_quantity_unknown_id_does_not_write() {
        let mut model = model();
        let update = model.change_quantity(ProductId::new(9), 1).unwrap();

        assert!(!update.persisted);
        assert!(update.cart.is_empty());
        assert!(model.storage().read(CART_KEY).is_none());
    }

    #[test]
    fn test_remove_filters_matching_line() {
        let mut model = model();
        model.add(product(1, "A", 5)).unwrap();
        model.add(product(2, "B", 5)).unwrap();

        let update = model.remove(ProductId::new(1)).unwrap();

        assert_eq!(update.cart.items().len(), 1);
        assert_eq!(update.cart.items()[0].id, ProductId::new(2));
        assert_eq!(update.count, 1);
    }

    #[test]
    fn test_count_and_total() {
        let mut cart = Cart::new();
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);

        cart.add(product(1, "A", 10));
        cart.add(product(1, "A", 10));
        cart.add(CartProduct {
            id: ProductId::new(2),
            name: "B".to_string(),
            price: Decimal::new(3599, 2),
        });

        assert_eq!(cart.count(), 3);
        assert_eq!(cart.items()[0].line_total(), Decimal::from(20));
        assert_eq!(cart.total(), Decimal::new(5599, 2));
    }

    #[test]
    fn test_blob_round_trip_preserves_order() {
        let mut cart = Cart::new();
        cart.add(product(5, "E", 1));
        cart.add(CartProduct {
            id: ProductId::new(2),
            name: "قهوة".to_string(),
            price: Decimal::new(125, 1),
        });
        cart.change_quantity(ProductId::new(5), 2);

        let decoded = Cart::from_blob(&cart.to_blob()).unwrap();
        assert_eq!(decoded, cart);
    }

    #[test]
    fn test_blob_format_is_plain_array() {
        let mut cart = Cart::new();
        cart.add(CartProduct {
            id: ProductId::new(1),
            name: "A".to_string(),
            price: Decimal::new(105, 1),
        });

        let value: serde_json::Value = serde_json::from_str(&cart.to_blob()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"id": 1, "name": "A", "price": 10.5, "quantity": 1}])
        );
    }

    #[test]
    fn test_corrupt_blob_loads_as_empty() {
        for blob in [
            "not json",
            "{}",
            r#"[{"id":1}]"#,
            r#"[{"id":1,"name":"A","price":1,"quantity":0}]"#,
            r#"[{"id":1,"name":"A","price":1,"quantity":1},{"id":1,"name":"A","price":1,"quantity":2}]"#,
        ] {
            let model = CartModel::new(MemoryCartStorage::with_entry(CART_KEY, blob));
            assert!(model.try_load().is_err(), "{blob} should be rejected");
            assert!(model.load().is_empty());
            assert_eq!(model.count(), 0);
        }
    }

    #[test]
    fn test_out_of_range_price_blob_loads_as_empty() {
        let huge = Decimal::from(50_000_000_000_i64);
        for blob in [
            format!(r#"[{{"id":1,"name":"A","price":{huge},"quantity":2}}]"#),
            r#"[{"id":1,"name":"A","price":-1,"quantity":1}]"#.to_string(),
            r#"[{"id":1,"name":"A","price":5e28,"quantity":1},{"id":2,"name":"B","price":5e28,"quantity":1}]"#.to_string(),
        ] {
            let model = CartModel::new(MemoryCartStorage::with_entry(CART_KEY, blob.as_str()));
            assert!(
                matches!(model.try_load(), Err(CartDecodeError::PriceOutOfRange(_))),
                "{blob} should be rejected"
            );
            assert!(model.load().is_empty());
        }
    }

    #[test]
    fn test_huge_prices_saturate_instead_of_panicking() {
        let mut cart = Cart::new();
        let price = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        cart.add(CartProduct {
            id: ProductId::new(1),
            name: "A".to_string(),
            price,
        });
        cart.add(CartProduct {
            id: ProductId::new(1),
            name: "A".to_string(),
            price,
        });
        cart.add(CartProduct {
            id: ProductId::new(2),
            name: "B".to_string(),
            price,
        });

        assert_eq!(cart.items()[0].line_total(), Decimal::MAX);
        assert_eq!(cart.total(), Decimal::MAX);
        assert_eq!(cart.checked_total(), None);
        assert!(Cart::from_blob(&cart.to_blob()).is_err());
    }

    #[test]
    fn test_max_price_cart_total_is_exact() {
        let mut cart = Cart::new();
        for id in 1..=3 {
            cart.add(CartProduct {
                id: ProductId::new(id),
                name: "P".to_string(),
                price: MAX_PRICE,
            });
        }
        assert_eq!(cart.checked_total(), Some(MAX_PRICE * Decimal::from(3)));
        assert_eq!(Cart::from_blob(&cart.to_blob()).unwrap(), cart);
    }

    #[test]
    fn test_cart_product_rejects_out_of_range_price() {
        let ok: CartProduct =
            serde_json::from_str(r#"{"id":1,"name":"A","price":"1000000000"}"#).unwrap();
        assert_eq!(ok.price, MAX_PRICE);

        for price in [r#""1000000000.01""#, r#""-1""#, r#""50000000000000000000000000000""#] {
            let json = format!(r#"{{"id":1,"name":"A","price":{price}}}"#);
            assert!(serde_json::from_str::<CartProduct>(&json).is_err(), "{price}");
        }
    }

    #[test]
    fn test_refused_write_keeps_previous_cart() {
        let mut model = CartModel::new(MemoryCartStorage::with_limit(120));
        model.add(product(1, "A", 1)).unwrap();

        let err = model.add(product(2, &"B".repeat(200), 1)).unwrap_err();
        assert!(matches!(err, CartStorageError::TooLarge { limit: 120, .. }));

        let cart = model.load();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_custom_key_isolates_carts() {
        let mut storage = MemoryCartStorage::new();
        {
            let mut first = CartModel::with_key(&mut storage, "cart-a");
            first.add(product(1, "A", 1)).unwrap();
        }
        let second = CartModel::with_key(&mut storage, "cart-b");
        assert_eq!(second.key(), "cart-b");
        assert!(second.load().is_empty());
        assert!(storage.read("cart-a").is_some());
    }

    #[test]
    fn test_operation_sequences_keep_invariants() {
        // Deterministic pseudo-random walk over add/remove/change_quantity.
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };

        let mut model = model();
        for _ in 0..2_000 {
            let id = i64::try_from(next() % 5).unwrap();
            let update = match next() % 4 {
                0 | 1 => model.add(product(id, "P", 3)).unwrap(),
                2 => model.remove(ProductId::new(id)).unwrap(),
                _ => {
                    let delta = i64::try_from(next() % 7).unwrap() - 3;
                    model.change_quantity(ProductId::new(id), delta).unwrap()
                }
            };

            let cart = model.load();
            assert_eq!(cart, update.cart);
            let mut ids = HashSet::new();
            for item in cart.items() {
                assert!(item.quantity >= 1);
                assert!(ids.insert(item.id));
            }
            let sum: u64 = cart.items().iter().map(|i| u64::from(i.quantity)).sum();
            assert_eq!(cart.count(), sum);
            assert_eq!(cart.count() == 0, cart.is_empty());
        }
    }
}
