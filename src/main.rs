//! Web Cart entry point
//!
//! On the web the crate's `start` export boots the cart; this binary only
//! does work on native, where it runs a smoke check over in-memory storage.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Web Cart (native) starting...");
    log::info!("Native mode has no DOM - run with `trunk serve` for the web version");

    println!("\nRunning cart store smoke check...");
    if let Err(e) = smoke_check() {
        eprintln!("✗ Cart smoke check failed: {}", e);
        std::process::exit(1);
    }
    println!("✓ Cart smoke check passed!");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web_cart::web::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_check() -> web_cart::Result<()> {
    use web_cart::{CartConfig, CartStore, CartView, MemoryStore, ViewKind};

    let config = CartConfig::default();
    let mut store = CartStore::open(MemoryStore::new(), config.storage_key.as_str());
    store.add("A", "Widget", "9.99", "4.00")?;
    store.add("A", "Widget", "9.99", "4.00")?;
    store.add("B", "Bolt", "0.25", "0.05")?;
    store.remove("B")?;

    let reloaded = CartStore::open(store.storage().clone(), config.storage_key.as_str());
    assert_eq!(reloaded.cart(), store.cart());

    let view = CartView::build(reloaded.cart(), ViewKind::Checkout, &config.currency_symbol);
    for row in &view.rows {
        println!("  {:<20} {}", row.label, row.line_total);
    }
    println!("  {:<20} {}", "Total", view.total);
    assert_eq!(view.total, "$19.98");
    Ok(())
}
