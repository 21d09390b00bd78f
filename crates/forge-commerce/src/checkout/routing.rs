//! The checkout hand-off policy.
//!
//! Payment runs through externally hosted, fixed-price payment pages, one
//! URL per product. There is no multi-line invoicing API behind them, so
//! the entire job of this module is working around that constraint: one
//! distinct line can be sent straight to its link; more than one has to be
//! paid link by link (or arranged directly with the shop).

use crate::cart::Cart;
use crate::catalog::ProductId;
use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};

/// One external payment page a buyer is sent to.
///
/// Quantity is not carried: the hosted page charges the fixed per-unit
/// price, a known limitation of link-based checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutHandoff {
    /// Product being paid for.
    pub product_id: ProductId,
    /// Display name, for labelling the link.
    pub product_name: String,
    /// The hosted checkout page URL.
    pub url: String,
}

/// How to initiate payment for the current cart contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CheckoutRoute {
    /// Exactly one distinct line: open its payment page directly.
    Direct(CheckoutHandoff),
    /// Two or more distinct lines: no unified session exists, so each
    /// item's payment page is presented individually.
    PerItem(Vec<CheckoutHandoff>),
}

impl CheckoutRoute {
    /// Decide the hand-off for a cart.
    ///
    /// An empty cart is a precondition violation (the UI never offers
    /// checkout in that state) and comes back as an error rather than a
    /// route.
    pub fn for_cart(cart: &Cart) -> Result<CheckoutRoute, CheckoutError> {
        let mut handoffs: Vec<CheckoutHandoff> = cart
            .items()
            .iter()
            .map(|i| CheckoutHandoff {
                product_id: i.product.id.clone(),
                product_name: i.product.name.clone(),
                url: i.product.checkout_link.clone(),
            })
            .collect();

        match handoffs.len() {
            0 => Err(CheckoutError::EmptyCart),
            1 => {
                let handoff = handoffs.remove(0);
                tracing::debug!(product = %handoff.product_id, "checkout routed direct");
                Ok(CheckoutRoute::Direct(handoff))
            }
            n => {
                tracing::debug!(lines = n, "checkout routed per-item");
                Ok(CheckoutRoute::PerItem(handoffs))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn product(id: &str, link: &str) -> Product {
        Product::new(id, id.to_uppercase(), Money::from_dollars(10.0), "PN", "/p.png", link)
    }

    #[test]
    fn test_empty_cart_is_an_error() {
        let cart = Cart::new();
        assert_eq!(CheckoutRoute::for_cart(&cart), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_single_line_routes_direct() {
        let mut cart = Cart::new();
        let p = product("a", "https://pay.example/a");
        cart.add(&p);
        cart.add(&p); // quantity does not change the routing

        match CheckoutRoute::for_cart(&cart).unwrap() {
            CheckoutRoute::Direct(handoff) => {
                assert_eq!(handoff.url, "https://pay.example/a");
                assert_eq!(handoff.product_id, p.id);
            }
            other => panic!("expected direct route, got {other:?}"),
        }
    }

    #[test]
    fn test_multiple_lines_route_per_item() {
        let mut cart = Cart::new();
        cart.add(&product("a", "https://pay.example/a"));
        cart.add(&product("b", "https://pay.example/b"));

        match CheckoutRoute::for_cart(&cart).unwrap() {
            CheckoutRoute::PerItem(handoffs) => {
                let urls: Vec<_> = handoffs.iter().map(|h| h.url.as_str()).collect();
                assert_eq!(urls, ["https://pay.example/a", "https://pay.example/b"]);
            }
            other => panic!("expected per-item route, got {other:?}"),
        }
    }

    #[test]
    fn test_removing_back_to_one_line_restores_direct() {
        let mut cart = Cart::new();
        let a = product("a", "https://pay.example/a");
        let b = product("b", "https://pay.example/b");
        cart.add(&a);
        cart.add(&b);
        cart.remove(&a.id);

        assert!(matches!(
            CheckoutRoute::for_cart(&cart).unwrap(),
            CheckoutRoute::Direct(_)
        ));
    }
}
