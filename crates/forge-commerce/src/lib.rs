//! Commerce domain types and logic for the FleetForge site.
//!
//! This crate holds everything that is not presentation:
//!
//! - **Catalog**: the static in-stock parts list with hosted checkout links
//! - **Cart**: line items keyed by product id, with derived pricing
//! - **Checkout**: the hand-off policy for fixed-price external payment links
//! - **Forms**: lead-form definitions, validation and transport payloads
//! - **Business**: contact constants surfaced throughout the site
//!
//! # Example
//!
//! ```rust
//! use forge_commerce::prelude::*;
//!
//! let catalog = Catalog::stock();
//! let mut cart = Cart::new();
//! cart.add(&catalog[0]);
//! cart.add(&catalog[0]);
//!
//! assert_eq!(cart.total_items(), 2);
//! let pricing = cart.pricing();
//! assert_eq!(pricing.total, pricing.subtotal + pricing.processing_fee);
//! ```

pub mod business;
pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod forms;

pub use error::{CheckoutError, FormError};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CheckoutError, FormError};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product, ProductId};

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem, LinePricing, PROCESSING_FEE_PERCENT};

    // Checkout
    pub use crate::checkout::{CheckoutHandoff, CheckoutRoute};

    // Forms
    pub use crate::forms::{
        Attachment, Delivery, LeadForm, Payload, Submission, Urgency, FORM_ENDPOINT,
        FORM_NAME_FIELD, HONEYPOT_FIELD,
    };
}
