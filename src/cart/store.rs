//! Cart contents and their LocalStorage mirror

use serde::{Deserialize, Serialize};

use super::item::{LineItem, parse_amount};
use crate::error::{CartError, Result};
use crate::platform::KeyValueStore;
use crate::round_cents;

/// What an `add` did to the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was appended with quantity 1
    Added,
    /// An existing entry's quantity was bumped to `qty`
    Incremented { qty: u32 },
}

/// Ordered, id-unique list of line items
///
/// Serializes as the bare JSON array of items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up the entry for a product id
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Quantity held for a product id (0 if absent)
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.get(id).map(|item| item.qty).unwrap_or(0)
    }

    /// Add one unit of a product, parsing price and cost from page input
    ///
    /// Existing entries keep the name, price and cost of their first add.
    /// Invalid input leaves the cart untouched.
    pub fn add(&mut self, id: &str, name: &str, price: &str, cost: &str) -> Result<AddOutcome> {
        if id.is_empty() {
            return Err(CartError::EmptyId);
        }
        let price = parse_amount("price", price)?;
        let cost = parse_amount("cost", cost)?;
        Ok(self.add_item(LineItem::new(id, name, price, cost)))
    }

    fn add_item(&mut self, item: LineItem) -> AddOutcome {
        match self.items.iter_mut().find(|e| e.id == item.id) {
            Some(existing) => {
                existing.qty = existing.qty.saturating_add(1);
                AddOutcome::Incremented { qty: existing.qty }
            }
            None => {
                self.items.push(item);
                AddOutcome::Added
            }
        }
    }

    /// Remove a product entirely. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Sum of quantities across all entries
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.qty)).sum()
    }

    /// Sum of price x quantity, rounded to cents
    pub fn total_price(&self) -> f64 {
        round_cents(
            self.items
                .iter()
                .map(LineItem::line_total)
                .fold(0.0, |acc, t| acc + t),
        )
    }

    /// Parse the persisted form, rejecting payloads that break cart invariants
    pub fn from_json(json: &str) -> Result<Self> {
        let cart: Cart = serde_json::from_str(json)?;
        cart.validate()?;
        Ok(cart)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        for (i, item) in self.items.iter().enumerate() {
            if !item.is_valid() {
                return Err(CartError::Corrupt(format!("entry {i} ({:?}) is invalid", item.id)));
            }
            if self.items[..i].iter().any(|other| other.id == item.id) {
                return Err(CartError::Corrupt(format!("duplicate id {:?}", item.id)));
            }
        }
        Ok(())
    }
}

/// A cart bound to the storage key it is persisted under
///
/// Every mutation writes the full cart back, overwriting prior contents.
pub struct CartStore<K: KeyValueStore> {
    cart: Cart,
    storage: K,
    key: String,
}

impl<K: KeyValueStore> CartStore<K> {
    /// Create an empty store without reading storage
    pub fn new(storage: K, key: impl Into<String>) -> Self {
        Self {
            cart: Cart::new(),
            storage,
            key: key.into(),
        }
    }

    /// Create a store and restore its contents from storage
    pub fn open(storage: K, key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, key);
        store.load();
        store
    }

    /// Restore the cart from storage
    ///
    /// Missing or malformed data resets to an empty cart. This never fails.
    pub fn load(&mut self) {
        let json = match self.storage.get(&self.key) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read cart from storage: {}", e);
                None
            }
        };

        self.cart = match json.as_deref().map(Cart::from_json) {
            Some(Ok(cart)) => {
                log::info!("Loaded cart ({} entries)", cart.len());
                cart
            }
            Some(Err(e)) => {
                log::warn!("Discarding stored cart: {}", e);
                Cart::new()
            }
            None => {
                log::info!("No stored cart found, starting empty");
                Cart::new()
            }
        };
    }

    /// Write the full cart to storage
    pub fn save(&mut self) -> Result<()> {
        let json = self.cart.to_json()?;
        self.storage.set(&self.key, &json)?;
        log::debug!("Cart saved ({} entries)", self.cart.len());
        Ok(())
    }

    /// Add one unit of a product and persist
    pub fn add(&mut self, id: &str, name: &str, price: &str, cost: &str) -> Result<AddOutcome> {
        let outcome = self.cart.add(id, name, price, cost)?;
        self.save()?;
        Ok(outcome)
    }

    /// Remove a product and persist, even when it was absent
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let removed = self.cart.remove(id);
        self.save()?;
        Ok(removed)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    pub fn total_price(&self) -> f64 {
        self.cart.total_price()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn widget(cart: &mut Cart) -> AddOutcome {
        cart.add("A", "Widget", "9.99", "4.00").unwrap()
    }

    #[test]
    fn test_add_same_id_twice_increments() {
        let mut cart = Cart::new();
        assert_eq!(widget(&mut cart), AddOutcome::Added);
        assert_eq!(widget(&mut cart), AddOutcome::Incremented { qty: 2 });

        assert_eq!(cart.len(), 1);
        let item = cart.get("A").unwrap();
        assert_eq!(item.qty, 2);
        assert_eq!(item.price, 9.99);
        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(format!("{:.2}", cart.total_price()), "19.98");
    }

    #[test]
    fn test_increment_keeps_first_name_and_price() {
        let mut cart = Cart::new();
        cart.add("A", "Widget", "9.99", "4.00").unwrap();
        cart.add("A", "Renamed", "1.00", "0.50").unwrap();

        let item = cart.get("A").unwrap();
        assert_eq!(item.name, "Widget");
        assert_eq!(item.price, 9.99);
        assert_eq!(item.qty, 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add("B", "Bolt", "0.25", "0.05").unwrap();
        cart.add("A", "Widget", "9.99", "4.00").unwrap();
        cart.add("B", "Bolt", "0.25", "0.05").unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["B", "A"]);
    }

    #[test]
    fn test_add_then_remove_empties_cart() {
        let mut cart = Cart::new();
        widget(&mut cart);
        assert!(cart.remove("A"));
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price(), 0.0);
        assert!(cart.total_price().is_sign_positive());
        assert_eq!(format!("{:.2}", Cart::new().total_price()), "0.00");
        assert_eq!(format!("{:.2}", cart.total_price()), "0.00");
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut cart = Cart::new();
        widget(&mut cart);
        let before = cart.clone();

        assert!(!cart.remove("missing"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_rejects_non_numeric_price() {
        let mut cart = Cart::new();
        widget(&mut cart);
        let before = cart.clone();

        let err = cart.add("A", "Widget", "abc", "4.00").unwrap_err();
        assert!(matches!(err, CartError::InvalidAmount { field: "price", .. }));
        let err = cart.add("B", "Bolt", "1.00", "").unwrap_err();
        assert!(matches!(err, CartError::InvalidAmount { field: "cost", .. }));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_rejects_empty_id() {
        let mut cart = Cart::new();
        assert!(matches!(cart.add("", "Widget", "1", "1"), Err(CartError::EmptyId)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_price_rounds_to_cents() {
        let mut cart = Cart::new();
        cart.add("A", "Third", "0.333", "0").unwrap();
        cart.add("A", "Third", "0.333", "0").unwrap();
        cart.add("A", "Third", "0.333", "0").unwrap();
        assert_eq!(cart.total_price(), 1.0);
    }

    #[test]
    fn test_json_layout() {
        let mut cart = Cart::new();
        widget(&mut cart);
        let value: serde_json::Value = serde_json::from_str(&cart.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "id": "A", "name": "Widget", "price": 9.99, "cost": 4.0, "qty": 1 }
            ])
        );
    }

    #[test]
    fn test_from_json_rejects_invariant_violations() {
        let zero_qty = r#"[{"id":"A","name":"W","price":1.0,"cost":1.0,"qty":0}]"#;
        assert!(matches!(Cart::from_json(zero_qty), Err(CartError::Corrupt(_))));

        let dup = r#"[{"id":"A","name":"W","price":1.0,"cost":1.0,"qty":1},
                      {"id":"A","name":"W","price":1.0,"cost":1.0,"qty":2}]"#;
        assert!(matches!(Cart::from_json(dup), Err(CartError::Corrupt(_))));

        let negative_qty = r#"[{"id":"A","name":"W","price":1.0,"cost":1.0,"qty":-1}]"#;
        assert!(matches!(Cart::from_json(negative_qty), Err(CartError::Json(_))));
    }

    #[test]
    fn test_store_persists_every_mutation() {
        let mut store = CartStore::new(MemoryStore::new(), "cart");
        store.add("A", "Widget", "9.99", "4.00").unwrap();

        let saved = store.storage().get("cart").unwrap().unwrap();
        assert_eq!(Cart::from_json(&saved).unwrap(), *store.cart());

        store.remove("A").unwrap();
        assert_eq!(store.storage().get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_store_remove_missing_still_saves() {
        let mut store = CartStore::new(MemoryStore::new(), "cart");
        assert!(!store.remove("missing").unwrap());
        assert_eq!(store.storage().get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_store_load_absent_or_corrupt_is_empty() {
        let store = CartStore::open(MemoryStore::new(), "cart");
        assert!(store.cart().is_empty());

        for junk in ["not json", "{}", "null", "[{\"id\":\"A\"}]", ""] {
            let storage = MemoryStore::new().with_entry("cart", junk);
            let store = CartStore::open(storage, "cart");
            assert!(store.cart().is_empty(), "{junk:?} should load as empty");
        }
    }

    #[test]
    fn test_store_uses_its_own_key() {
        let storage = MemoryStore::new()
            .with_entry("cart", r#"[{"id":"A","name":"W","price":1.0,"cost":1.0,"qty":3}]"#);
        let store = CartStore::open(storage, "other");
        assert!(store.cart().is_empty());
        assert_eq!(store.key(), "other");
    }

    #[test]
    fn test_store_write_failure_keeps_memory_state() {
        let mut store = CartStore::new(MemoryStore::read_only(), "cart");
        let err = store.add("A", "Widget", "9.99", "4.00").unwrap_err();
        assert!(matches!(err, CartError::Storage(_)));
        assert_eq!(store.total_item_count(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8, u32),
        Remove(u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..6, 0u32..100_000).prop_map(|(id, cents)| Op::Add(id, cents)),
            (0u8..6).prop_map(Op::Remove),
        ]
    }

    fn apply(cart: &mut Cart, op: &Op) {
        match op {
            Op::Add(id, cents) => {
                let price = format!("{}.{:02}", cents / 100, cents % 100);
                cart.add(&format!("p{id}"), "Product", &price, "1.00").unwrap();
            }
            Op::Remove(id) => {
                cart.remove(&format!("p{id}"));
            }
        }
    }

    proptest! {
        #[test]
        fn test_counts_match_model(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut cart = Cart::new();
            let mut model: HashMap<String, u64> = HashMap::new();
            for op in &ops {
                apply(&mut cart, op);
                match op {
                    Op::Add(id, _) => *model.entry(format!("p{id}")).or_default() += 1,
                    Op::Remove(id) => { model.remove(&format!("p{id}")); }
                }
            }

            prop_assert_eq!(cart.len(), model.len());
            prop_assert_eq!(cart.total_item_count(), model.values().sum::<u64>());
            for item in cart.items() {
                prop_assert!(item.qty >= 1);
                prop_assert_eq!(u64::from(item.qty), model[&item.id]);
            }
        }

        #[test]
        fn test_total_price_matches_cents_model(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut cart = Cart::new();
            // id -> (unit price in cents from the first add, qty)
            let mut model: HashMap<u8, (u64, u64)> = HashMap::new();
            for op in &ops {
                apply(&mut cart, op);
                match op {
                    Op::Add(id, cents) => model.entry(*id).or_insert((u64::from(*cents), 0)).1 += 1,
                    Op::Remove(id) => { model.remove(id); }
                }
            }

            let cents: u64 = model.values().map(|(price, qty)| price * qty).sum();
            prop_assert_eq!(cart.total_price(), cents as f64 / 100.0);
            prop_assert_eq!(
                format!("{:.2}", cart.total_price()),
                format!("{}.{:02}", cents / 100, cents % 100)
            );
        }

        #[test]
        fn test_save_then_load_roundtrip(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let mut store = CartStore::new(MemoryStore::new(), "cart");
            for op in &ops {
                match op {
                    Op::Add(id, cents) => {
                        let price = format!("{}.{:02}", cents / 100, cents % 100);
                        store.add(&format!("p{id}"), "Product", &price, "1.00").unwrap();
                    }
                    Op::Remove(id) => {
                        store.remove(&format!("p{id}")).unwrap();
                    }
                }
            }

            let reloaded = CartStore::open(store.storage().clone(), "cart");
            prop_assert_eq!(reloaded.cart(), store.cart());
        }
    }
}
