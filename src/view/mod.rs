//! Cart rendering
//!
//! Views are built as plain data (`CartView`) and written to a `Surface`
//! addressed by logical role. The DOM is one surface; tests use another.

pub mod model;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(test)]
pub(crate) mod testing;

pub use model::{CartView, RowView, ViewKind, format_money};
pub use render::{Renderer, Role, Surface};

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
