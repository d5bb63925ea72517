//! View models for the cart and checkout pages

use super::render::Role;
use crate::cart::{Cart, LineItem};
use crate::round_cents;

/// Which page view is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Cart page, rows carry a remove control
    Cart,
    /// Checkout page, read-only rows
    Checkout,
}

impl ViewKind {
    /// Container the rows are written into
    pub fn items_role(&self) -> Role {
        match self {
            ViewKind::Cart => Role::CartItems,
            ViewKind::Checkout => Role::CheckoutItems,
        }
    }

    /// Element the grand total is written into
    pub fn total_role(&self) -> Role {
        match self {
            ViewKind::Cart => Role::CartTotal,
            ViewKind::Checkout => Role::CheckoutTotal,
        }
    }

    /// CSS class applied to each row
    pub fn row_class(&self) -> &'static str {
        match self {
            ViewKind::Cart => "cart-row",
            ViewKind::Checkout => "checkout-row",
        }
    }

    pub fn removable(&self) -> bool {
        matches!(self, ViewKind::Cart)
    }
}

/// One rendered line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Product id, bound to the remove control
    pub id: String,
    /// "Name (xQty)"
    pub label: String,
    /// Formatted price x quantity
    pub line_total: String,
    pub class: &'static str,
    /// Whether the row gets a remove control
    pub removable: bool,
}

impl RowView {
    fn from_item(item: &LineItem, kind: ViewKind, currency: &str) -> Self {
        Self {
            id: item.id.clone(),
            label: format!("{} (x{})", item.name, item.qty),
            line_total: format_money(currency, item.line_total()),
            class: kind.row_class(),
            removable: kind.removable(),
        }
    }
}

/// A full page view: one row per line item plus the grand total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub kind: ViewKind,
    pub rows: Vec<RowView>,
    pub total: String,
}

impl CartView {
    pub fn build(cart: &Cart, kind: ViewKind, currency: &str) -> Self {
        Self {
            kind,
            rows: cart
                .items()
                .iter()
                .map(|item| RowView::from_item(item, kind, currency))
                .collect(),
            total: format_money(currency, cart.total_price()),
        }
    }
}

/// Format an amount with two fractional digits, e.g. "$19.98"
///
/// Rounds through `round_cents` so row and grand totals agree on half cents.
pub fn format_money(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, round_cents(amount))
}
