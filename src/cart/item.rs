//! Cart line items

use serde::{Deserialize, Serialize};

use crate::error::{CartError, Result};

/// One product entry in the cart
///
/// Serialized field names form the persisted layout: `id`, `name`, `price`,
/// `cost`, `qty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product id, unique within a cart
    pub id: String,
    /// Display name captured on first add
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Unit cost (persisted, never displayed)
    pub cost: f64,
    /// Quantity, always >= 1
    pub qty: u32,
}

impl LineItem {
    /// Create a line item with quantity 1
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, cost: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            cost,
            qty: 1,
        }
    }

    /// Price multiplied by quantity, unrounded
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }

    /// Whether this entry satisfies the cart invariants
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && self.qty >= 1 && is_amount(self.price) && is_amount(self.cost)
    }
}

fn is_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Parse a price or cost as entered by page markup
///
/// Surrounding whitespace is ignored. Anything that is not a finite,
/// non-negative number is rejected rather than stored.
pub fn parse_amount(field: &'static str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| is_amount(*v))
        .ok_or_else(|| CartError::InvalidAmount {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("price", "9.99").unwrap(), 9.99);
        assert_eq!(parse_amount("price", " 4 ").unwrap(), 4.0);
        assert_eq!(parse_amount("cost", "0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        for raw in ["abc", "", "NaN", "inf", "-1.50", "9.99abc"] {
            let err = parse_amount("price", raw).unwrap_err();
            assert!(
                matches!(err, CartError::InvalidAmount { field: "price", .. }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_line_total() {
        let mut item = LineItem::new("A", "Widget", 9.99, 4.0);
        assert_eq!(item.qty, 1);
        item.qty = 3;
        assert!((item.line_total() - 29.97).abs() < 1e-9);
    }

    #[test]
    fn test_is_valid() {
        assert!(LineItem::new("A", "Widget", 1.0, 0.5).is_valid());

        let mut zero_qty = LineItem::new("A", "Widget", 1.0, 0.5);
        zero_qty.qty = 0;
        assert!(!zero_qty.is_valid());

        assert!(!LineItem::new("", "Widget", 1.0, 0.5).is_valid());
        assert!(!LineItem::new("A", "Widget", f64::NAN, 0.5).is_valid());
    }
}
