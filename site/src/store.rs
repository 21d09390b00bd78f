//! Application stores.
//!
//! The cart is an explicit store object with a defined mutation interface,
//! created once by the root [`crate::App`] and handed to the UI through
//! context. Components subscribe through the inner signal; derived totals
//! are recomputed from current cart state on every reactive read, never
//! cached here.

use forge_commerce::prelude::*;
use leptos::prelude::*;
use std::time::Duration;

/// Reactive wrapper around the domain [`Cart`].
#[derive(Debug, Clone, Copy)]
pub struct CartStore {
    cart: RwSignal<Cart>,
}

impl CartStore {
    /// Create an empty cart store and provide it via context.
    pub fn provide() -> Self {
        let store = Self {
            cart: RwSignal::new(Cart::new()),
        };
        provide_context(store);
        store
    }

    /// Get the store provided by the root component.
    pub fn expect() -> Self {
        expect_context::<CartStore>()
    }

    /// Add one unit of a product.
    pub fn add(&self, product: &Product) {
        self.cart.update(|c| c.add(product));
    }

    /// Add several units of a product (the parts-page quantity stepper).
    pub fn add_many(&self, product: &Product, count: u32) {
        self.cart.update(|c| {
            for _ in 0..count {
                c.add(product);
            }
        });
    }

    /// Remove a product's line item.
    pub fn remove(&self, id: &ProductId) {
        self.cart.update(|c| {
            c.remove(id);
        });
    }

    /// Set a line item's quantity; below 1 removes the line.
    pub fn set_quantity(&self, id: &ProductId, quantity: i64) {
        self.cart.update(|c| {
            c.set_quantity(id, quantity);
        });
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.cart.update(|c| c.clear());
    }

    /// Snapshot of the current line items, in insertion order.
    pub fn items(&self) -> Vec<LineItem> {
        self.cart.with(|c| c.items().to_vec())
    }

    /// Whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.with(|c| c.is_empty())
    }

    /// Sum of quantities, shown in the header badge.
    pub fn total_items(&self) -> u32 {
        self.cart.with(|c| c.total_items())
    }

    /// Pricing breakdown for the order summary.
    pub fn pricing(&self) -> CartPricing {
        self.cart.with(|c| c.pricing())
    }

    /// The checkout hand-off for the current contents.
    pub fn checkout_route(&self) -> Result<CheckoutRoute, CheckoutError> {
        self.cart.with(CheckoutRoute::for_cart)
    }
}

/// Kind of toast feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// How long a toast stays on screen.
const TOAST_LIFETIME: Duration = Duration::from_secs(6);

/// Store for transient success/failure feedback.
#[derive(Debug, Clone, Copy)]
pub struct ToastStore {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastStore {
    /// Create the toast store and provide it via context.
    pub fn provide() -> Self {
        let store = Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        };
        provide_context(store);
        store
    }

    /// Get the store provided by the root component.
    pub fn expect() -> Self {
        expect_context::<ToastStore>()
    }

    /// Show a success toast.
    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), message.into());
    }

    /// Show a failure toast.
    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), message.into());
    }

    /// Currently visible toasts.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    /// Remove a toast by id.
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|ts| ts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, title: String, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|ts| {
            ts.push(Toast {
                id,
                kind,
                title,
                message,
            })
        });

        let store = *self;
        set_timeout(move || store.dismiss(id), TOAST_LIFETIME);
    }
}
