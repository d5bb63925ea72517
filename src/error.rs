//! Cart error type

use thiserror::Error;

/// Errors raised by cart mutations and storage access
#[derive(Debug, Error)]
pub enum CartError {
    #[error("product id must not be empty")]
    EmptyId,

    #[error("invalid {field} {value:?}: expected a non-negative number")]
    InvalidAmount { field: &'static str, value: String },

    #[error("stored cart is malformed: {0}")]
    Corrupt(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CartError>;
