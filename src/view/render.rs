//! Role-addressed rendering
//!
//! A page exposes some subset of the cart roles. Each renderer checks that
//! its roles are present before writing and reports whether it drew anything,
//! so the same code runs safely on every page.

use super::model::{CartView, RowView, ViewKind};
use crate::cart::Cart;

/// Logical page element a renderer can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Navigation item-count badge
    Badge,
    CartItems,
    CartTotal,
    CheckoutItems,
    CheckoutTotal,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Badge,
        Role::CartItems,
        Role::CartTotal,
        Role::CheckoutItems,
        Role::CheckoutTotal,
    ];
}

/// Something renderers can write to
pub trait Surface {
    /// Whether the page exposes an element for `role`
    fn has(&self, role: Role) -> bool;

    /// Replace the text content of the `role` element
    fn set_text(&mut self, role: Role, text: &str);

    /// Clear the `role` container and append one element per row
    fn replace_rows(&mut self, role: Role, rows: &[RowView]);
}

/// Draws the badge and the two page views from cart state
#[derive(Debug, Clone)]
pub struct Renderer {
    currency: String,
}

impl Renderer {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    /// Write the total item count into the badge. No-op without a badge.
    pub fn render_badge<S: Surface>(&self, surface: &mut S, cart: &Cart) -> bool {
        if !surface.has(Role::Badge) {
            return false;
        }
        surface.set_text(Role::Badge, &cart.total_item_count().to_string());
        true
    }

    /// Whether the page can show a view (both its container and total exist)
    pub fn exposes<S: Surface>(surface: &S, kind: ViewKind) -> bool {
        surface.has(kind.items_role()) && surface.has(kind.total_role())
    }

    /// Rebuild a page view from scratch. No-op if the page lacks it.
    pub fn render_view<S: Surface>(&self, surface: &mut S, cart: &Cart, kind: ViewKind) -> bool {
        if !Self::exposes(surface, kind) {
            return false;
        }
        let view = CartView::build(cart, kind, &self.currency);
        surface.replace_rows(kind.items_role(), &view.rows);
        surface.set_text(kind.total_role(), &view.total);
        true
    }

    pub fn render_cart_view<S: Surface>(&self, surface: &mut S, cart: &Cart) -> bool {
        self.render_view(surface, cart, ViewKind::Cart)
    }

    pub fn render_checkout_view<S: Surface>(&self, surface: &mut S, cart: &Cart) -> bool {
        self.render_view(surface, cart, ViewKind::Checkout)
    }

    /// Redraw everything the page exposes
    pub fn render_all<S: Surface>(&self, surface: &mut S, cart: &Cart) {
        self.render_badge(surface, cart);
        self.render_cart_view(surface, cart);
        self.render_checkout_view(surface, cart);
    }
}
