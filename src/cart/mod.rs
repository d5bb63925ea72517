//! Shopping cart model
//!
//! The cart is an ordered list of line items, unique by product id, mirrored
//! to LocalStorage as a bare JSON array after every mutation.

pub mod item;
pub mod store;

pub use item::{LineItem, parse_amount};
pub use store::{AddOutcome, Cart, CartStore};
