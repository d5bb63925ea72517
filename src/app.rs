//! Page controller
//!
//! Owns the cart store for the lifetime of the page and redraws every view
//! the page exposes after each mutation.

use crate::cart::{AddOutcome, CartStore};
use crate::config::CartConfig;
use crate::error::Result;
use crate::platform::KeyValueStore;
use crate::view::{Renderer, Surface};

/// User-visible acknowledgment of a cart action
pub trait Notifier {
    fn acknowledge(&self, message: &str);
}

/// Cart store, page surface and notifier wired together
pub struct CartApp<K: KeyValueStore, S: Surface, N: Notifier> {
    store: CartStore<K>,
    surface: S,
    notifier: N,
    renderer: Renderer,
}

impl<K: KeyValueStore, S: Surface, N: Notifier> CartApp<K, S, N> {
    /// Restore the cart from storage and draw the page
    pub fn start(storage: K, surface: S, notifier: N, config: &CartConfig) -> Self {
        let mut app = Self {
            store: CartStore::open(storage, config.storage_key.as_str()),
            surface,
            notifier,
            renderer: Renderer::new(config.currency_symbol.as_str()),
        };
        app.refresh();
        log::info!(
            "Cart ready: {} items, total {:.2}",
            app.store.total_item_count(),
            app.store.total_price()
        );
        app
    }

    /// Add one unit of a product, persist, acknowledge and redraw
    ///
    /// Rejected input leaves the cart untouched and shows nothing. A storage
    /// failure keeps the item in memory for this page but is still reported.
    pub fn add_to_cart(
        &mut self,
        id: &str,
        name: &str,
        price: &str,
        cost: &str,
    ) -> Result<AddOutcome> {
        let result = self.store.add(id, name, price, cost);
        self.refresh();

        match &result {
            Ok(outcome) => {
                log::info!("Added {:?} to cart ({:?})", id, outcome);
                self.notifier.acknowledge(&format!("{} added to cart", name));
            }
            Err(e) => log::warn!("Add to cart failed for {:?}: {}", id, e),
        }
        result
    }

    /// Remove a product entirely, persist and redraw
    pub fn remove_from_cart(&mut self, id: &str) -> Result<bool> {
        let result = self.store.remove(id);
        self.refresh();

        match &result {
            Ok(true) => log::info!("Removed {:?} from cart", id),
            Ok(false) => log::debug!("Remove ignored, {:?} not in cart", id),
            Err(e) => log::warn!("Remove from cart failed for {:?}: {}", id, e),
        }
        result
    }

    /// Redraw the badge and whichever views the page has
    pub fn refresh(&mut self) {
        self.renderer.render_all(&mut self.surface, self.store.cart());
    }

    pub fn store(&self) -> &CartStore<K> {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
