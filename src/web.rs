//! Browser entry points (WASM only)
//!
//! The page controller lives in a thread-local for the lifetime of the page.
//! Page markup reaches it through the exported `addToCart` / `removeFromCart`
//! functions or through delegated clicks on `data-add-to-cart` and
//! `data-remove-id` elements.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent, Window};

use crate::app::{CartApp, Notifier};
use crate::config::CartConfig;
use crate::consts::{ADD_TO_CART_ATTR, CONFIG_ATTR, REMOVE_ID_ATTR};
use crate::platform::LocalStorage;
use crate::view::DomSurface;

type BrowserApp = CartApp<LocalStorage, DomSurface, AlertNotifier>;

thread_local! {
    static APP: RefCell<Option<BrowserApp>> = const { RefCell::new(None) };
}

/// Blocking `window.alert` acknowledgment
pub struct AlertNotifier {
    window: Window,
}

impl Notifier for AlertNotifier {
    fn acknowledge(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

fn with_app<R>(f: impl FnOnce(&mut BrowserApp) -> R) -> Option<R> {
    let result = APP.with(|cell| cell.borrow_mut().as_mut().map(f));
    if result.is_none() {
        log::warn!("Cart used before page load completed");
    }
    result
}

/// Accept both numbers and strings from JS callers
fn amount_text(value: &JsValue) -> String {
    match value.as_f64() {
        Some(n) => n.to_string(),
        None => value.as_string().unwrap_or_default(),
    }
}

/// Add one unit of a product. Returns false if the add was rejected.
#[wasm_bindgen(js_name = addToCart)]
pub fn add_to_cart(id: &str, name: &str, price: JsValue, cost: JsValue) -> bool {
    let price = amount_text(&price);
    let cost = amount_text(&cost);
    with_app(|app| app.add_to_cart(id, name, &price, &cost).is_ok()).unwrap_or(false)
}

/// Remove a product entirely. Returns whether it was in the cart.
#[wasm_bindgen(js_name = removeFromCart)]
pub fn remove_from_cart(id: &str) -> bool {
    with_app(|app| app.remove_from_cart(id).unwrap_or(false)).unwrap_or(false)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document - cart disabled");
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(boot);
        if let Err(e) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            log::error!("Failed to wait for DOMContentLoaded - cart disabled: {:?}", e);
        }
    } else {
        boot();
    }
}

fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let overrides = document.body().and_then(|b| b.get_attribute(CONFIG_ATTR));
    let config = CartConfig::from_overrides(overrides.as_deref());

    let app = CartApp::start(
        LocalStorage::open(),
        DomSurface::new(document.clone(), config.elements.clone()),
        AlertNotifier { window },
        &config,
    );
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    install_click_delegation(&document);
}

/// One document-level listener serves every current and future button
fn install_click_delegation(document: &Document) {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        if let Ok(Some(button)) = target.closest(&format!("[{}]", REMOVE_ID_ATTR)) {
            if let Some(id) = button.get_attribute(REMOVE_ID_ATTR) {
                remove_from_cart(&id);
            }
        } else if let Ok(Some(button)) = target.closest(&format!("[{}]", ADD_TO_CART_ATTR)) {
            add_from_element(&button);
        }
    });
    if let Err(e) =
        document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to install cart click handler: {:?}", e);
        return;
    }
    closure.forget();
}

/// Read `data-id`, `data-name`, `data-price`, `data-cost` from a button
fn add_from_element(el: &Element) {
    let attr = |name: &str| el.get_attribute(name).unwrap_or_default();
    let id = attr("data-id");
    let name = attr("data-name");
    with_app(|app| app.add_to_cart(&id, &name, &attr("data-price"), &attr("data-cost")));
}
