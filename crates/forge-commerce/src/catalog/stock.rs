//! The static in-stock catalog.
//!
//! Read-only. Each product is bound to a hosted Stripe payment link; there
//! is no inventory tracking behind this list.

use crate::catalog::{Product, ProductId};
use crate::money::Money;

/// The in-stock parts catalog.
pub struct Catalog;

impl Catalog {
    /// All parts currently sold online.
    pub fn stock() -> Vec<Product> {
        vec![
            Product::new(
                "bumper-isuzu-gmc",
                "Front Bumper \u{2013} Isuzu NPR/NQR/NRR + GMC W-Series",
                Money::from_dollars(660.0),
                "Available on request",
                "/assets/products/bumper.png",
                "https://buy.stripe.com/14AdRabhZ6BG0qWbVebjW00",
            ),
            Product::new(
                "headlight-right-international",
                "International Headlight Assembly (Right)",
                Money::from_dollars(440.0),
                "4121490C94",
                "/assets/products/headlight-right.png",
                "https://buy.stripe.com/eVq00k1Hp3pu2z49N6bjW01",
            ),
            Product::new(
                "headlight-left-international",
                "International Headlight Assembly (Left)",
                Money::from_dollars(512.0),
                "4121489C94",
                "/assets/products/headlight-left.png",
                "https://buy.stripe.com/cNi14o71J6BGgpU5wQbjW02",
            ),
        ]
    }

    /// Look up a product by id.
    pub fn find(id: &ProductId) -> Option<Product> {
        Self::stock().into_iter().find(|p| &p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_has_unique_ids() {
        let stock = Catalog::stock();
        for (i, a) in stock.iter().enumerate() {
            for b in &stock[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find() {
        let id = ProductId::new("headlight-left-international");
        let product = Catalog::find(&id).unwrap();
        assert_eq!(product.price, Money::from_dollars(512.0));
        assert_eq!(product.part_number, "4121489C94");

        assert!(Catalog::find(&ProductId::new("no-such-part")).is_none());
    }

    #[test]
    fn test_every_product_has_a_checkout_link() {
        for product in Catalog::stock() {
            assert!(product.checkout_link.starts_with("https://"));
        }
    }
}
