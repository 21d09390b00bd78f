//! Cart pricing breakdown.

use crate::catalog::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart, as shown in the order summary.
///
/// Produced on demand by [`crate::cart::Cart::pricing`]; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of unit price times quantity over all lines.
    pub subtotal: Money,
    /// Processing & handling surcharge (3% of subtotal).
    pub processing_fee: Money,
    /// Subtotal plus processing fee.
    pub total: Money,
    /// Per-line breakdown.
    pub line_items: Vec<LinePricing>,
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Product this line prices.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Unit price times quantity.
    pub line_subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_subtotal_matches_components() {
        let line = LinePricing {
            product_id: ProductId::new("a"),
            unit_price: Money::new(1000),
            quantity: 3,
            line_subtotal: Money::new(3000),
        };
        assert_eq!(line.unit_price.times(line.quantity), line.line_subtotal);
    }
}
