//! Web Cart - A browser-side shopping cart
//!
//! Core modules:
//! - `cart`: Line items, the id-unique cart and its persisted store
//! - `view`: View models and role-addressed rendering surfaces
//! - `platform`: Browser/native platform abstraction (key-value storage)
//! - `app`: Page controller wiring store, surface and notifications
//! - `config`: Storage key, currency symbol and DOM element ids

pub mod app;
pub mod cart;
pub mod config;
pub mod error;
pub mod platform;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::{CartApp, Notifier};
pub use cart::{AddOutcome, Cart, CartStore, LineItem};
pub use config::{CartConfig, ElementIds};
pub use error::{CartError, Result};
pub use platform::{KeyValueStore, MemoryStore};
pub use view::{CartView, Renderer, Role, RowView, Surface, ViewKind};

/// Cart configuration constants
pub mod consts {
    /// LocalStorage key holding the serialized cart
    pub const STORAGE_KEY: &str = "cart";
    /// Currency symbol prefixed to every rendered amount
    pub const CURRENCY_SYMBOL: &str = "$";

    /// Default DOM element ids, one per rendering role
    pub const BADGE_ID: &str = "cart-count";
    pub const CART_ITEMS_ID: &str = "cart-items";
    pub const CART_TOTAL_ID: &str = "cart-total";
    pub const CHECKOUT_ITEMS_ID: &str = "checkout-items";
    pub const CHECKOUT_TOTAL_ID: &str = "checkout-total";

    /// Attribute carrying the item id on rendered remove buttons
    pub const REMOVE_ID_ATTR: &str = "data-remove-id";
    /// Marker attribute for declarative "add to cart" buttons
    pub const ADD_TO_CART_ATTR: &str = "data-add-to-cart";
    /// Attribute on `<body>` holding JSON config overrides
    pub const CONFIG_ATTR: &str = "data-cart-config";
}

/// Round an amount to whole cents, halves away from zero
///
/// Negative zero is normalized so it never displays as "-0.00".
#[inline]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0 + 0.0
}
