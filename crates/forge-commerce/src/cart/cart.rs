//! Cart and line item types.

use crate::cart::{CartPricing, LinePricing};
use crate::catalog::{Product, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Processing & handling surcharge applied to the subtotal.
pub const PROCESSING_FEE_PERCENT: f64 = 3.0;

/// A cart entry pairing a product with a quantity.
///
/// Quantity is never below 1; a decrement past 1 removes the line instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The product, copied from the catalog at add time.
    pub product: Product,
    /// Units of this product in the cart.
    pub quantity: u32,
}

impl LineItem {
    /// Unit price times quantity.
    pub fn line_subtotal(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// The in-memory shopping cart.
///
/// Holds at most one line item per product id, in insertion order. All
/// mutation goes through the methods here; derived totals are recomputed
/// from current state on every read and never stored. State lives for the
/// page session only and is discarded on reload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Add one unit of a product.
    ///
    /// Increments the quantity if a line for this product already exists,
    /// otherwise appends a new line with quantity 1. Always succeeds; there
    /// is no quantity cap or stock check.
    pub fn add(&mut self, product: &Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity += 1;
            tracing::debug!(product = %product.id, quantity = existing.quantity, "cart add");
            return;
        }
        self.items.push(LineItem {
            product: product.clone(),
            quantity: 1,
        });
        tracing::debug!(product = %product.id, quantity = 1u32, "cart add");
    }

    /// Remove the line item for a product.
    ///
    /// Returns whether a line was removed; removing an absent id is a no-op,
    /// not an error.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(product = %id, "cart remove");
        }
        removed
    }

    /// Set a line item's quantity to an absolute value.
    ///
    /// A quantity below 1 behaves exactly like [`Cart::remove`]. Setting an
    /// absent id is a no-op. Returns whether the cart changed.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove(id);
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == id) {
            item.quantity = quantity as u32;
            tracing::debug!(product = %id, quantity = item.quantity, "cart set_quantity");
            true
        } else {
            false
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total unit count (sum of quantities).
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products.
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }

    /// Get the line item for a product, if present.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product.id == id)
    }

    /// Sum of unit price times quantity over all lines.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.line_subtotal()).sum()
    }

    /// The 3% processing & handling surcharge on the subtotal.
    pub fn processing_fee(&self) -> Money {
        self.subtotal().percentage(PROCESSING_FEE_PERCENT)
    }

    /// Subtotal plus processing fee.
    pub fn total(&self) -> Money {
        self.subtotal() + self.processing_fee()
    }

    /// Full pricing breakdown for the order summary.
    pub fn pricing(&self) -> CartPricing {
        let subtotal = self.subtotal();
        let processing_fee = subtotal.percentage(PROCESSING_FEE_PERCENT);
        CartPricing {
            subtotal,
            processing_fee,
            total: subtotal + processing_fee,
            line_items: self
                .items
                .iter()
                .map(|i| LinePricing {
                    product_id: i.product.id.clone(),
                    unit_price: i.product.price,
                    quantity: i.quantity,
                    line_subtotal: i.line_subtotal(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: &str, dollars: f64) -> Product {
        Product::new(id, format!("Part {id}"), Money::from_dollars(dollars), "PN", "/p.png", "https://pay.example/p")
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.subtotal().is_zero());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_add_same_product_increments_single_line() {
        let mut cart = Cart::new();
        let p = product("bumper", 660.0);

        cart.add(&p);
        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.unique_items(), 1);
        assert_eq!(cart.get(&p.id).unwrap().quantity, 3);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut cart = Cart::new();
        let a = product("a", 10.0);
        let b = product("b", 20.0);

        cart.add(&a);
        cart.add(&b);
        cart.add(&a);

        let ids: Vec<_> = cart.items().iter().map(|i| i.product.id.as_str().to_string()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        let p = product("a", 10.0);
        cart.add(&p);

        assert!(cart.remove(&p.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.remove(&ProductId::new("ghost")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_is_absolute() {
        let mut cart = Cart::new();
        let p = product("a", 10.0);
        cart.add(&p);

        assert!(cart.set_quantity(&p.id, 5));
        assert_eq!(cart.total_items(), 5);

        assert!(cart.set_quantity(&p.id, 2));
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_set_quantity_below_one_removes() {
        for q in [0, -3] {
            let mut cart = Cart::new();
            let p = product("a", 10.0);
            cart.add(&p);

            cart.set_quantity(&p.id, q);
            assert!(cart.is_empty(), "quantity {q} should remove the line");
        }
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        let p = product("a", 10.0);
        cart.add(&p);

        assert!(!cart.set_quantity(&ProductId::new("ghost"), 4));
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product("a", 10.0));
        cart.add(&product("b", 20.0));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.subtotal().is_zero());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_derived_totals() {
        // Product A ($100) once, product B ($50) twice:
        // subtotal $200.00, fee $6.00, total $206.00
        let mut cart = Cart::new();
        let a = product("a", 100.0);
        let b = product("b", 50.0);
        cart.add(&a);
        cart.add(&b);
        cart.add(&b);

        assert_eq!(cart.subtotal(), Money::from_dollars(200.0));
        assert_eq!(cart.processing_fee(), Money::from_dollars(6.0));
        assert_eq!(cart.total(), Money::from_dollars(206.0));
    }

    #[test]
    fn test_pricing_breakdown() {
        let mut cart = Cart::new();
        let a = product("a", 100.0);
        cart.add(&a);
        cart.add(&a);

        let pricing = cart.pricing();
        assert_eq!(pricing.subtotal, Money::from_dollars(200.0));
        assert_eq!(pricing.total, pricing.subtotal + pricing.processing_fee);
        assert_eq!(pricing.line_items.len(), 1);
        assert_eq!(pricing.line_items[0].quantity, 2);
        assert_eq!(pricing.line_items[0].line_subtotal, Money::from_dollars(200.0));
    }

    #[test]
    fn test_catalog_products_flow_through() {
        let mut cart = Cart::new();
        let stock = Catalog::stock();
        cart.add(&stock[1]);

        let line = cart.get(&stock[1].id).unwrap();
        assert_eq!(line.product.checkout_link, stock[1].checkout_link);
    }
}
