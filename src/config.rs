//! Cart configuration
//!
//! Defaults come from `consts`. Pages may override any subset through a JSON
//! object in the `data-cart-config` attribute on `<body>`.

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::view::Role;

/// DOM element ids the renderers write to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// Navigation item-count badge
    pub badge: String,
    pub cart_items: String,
    pub cart_total: String,
    pub checkout_items: String,
    pub checkout_total: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            badge: consts::BADGE_ID.to_string(),
            cart_items: consts::CART_ITEMS_ID.to_string(),
            cart_total: consts::CART_TOTAL_ID.to_string(),
            checkout_items: consts::CHECKOUT_ITEMS_ID.to_string(),
            checkout_total: consts::CHECKOUT_TOTAL_ID.to_string(),
        }
    }
}

impl ElementIds {
    /// Element id for a rendering role
    pub fn id_for(&self, role: Role) -> &str {
        match role {
            Role::Badge => &self.badge,
            Role::CartItems => &self.cart_items,
            Role::CartTotal => &self.cart_total,
            Role::CheckoutItems => &self.checkout_items,
            Role::CheckoutTotal => &self.checkout_total,
        }
    }
}

/// Cart settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// LocalStorage key holding the cart
    pub storage_key: String,
    /// Prefix for rendered amounts
    pub currency_symbol: String,
    pub elements: ElementIds,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::STORAGE_KEY.to_string(),
            currency_symbol: consts::CURRENCY_SYMBOL.to_string(),
            elements: ElementIds::default(),
        }
    }
}

impl CartConfig {
    /// Build config from an optional JSON override object
    ///
    /// Missing fields keep their defaults. Malformed JSON falls back to the
    /// defaults entirely.
    pub fn from_overrides(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };

        match serde_json::from_str(raw) {
            Ok(config) => {
                log::info!("Loaded cart config overrides");
                config
            }
            Err(e) => {
                log::warn!("Ignoring malformed cart config ({}), using defaults", e);
                Self::default()
            }
        }
    }
}
