//! Checkout hand-off to hosted payment links.

mod routing;

pub use routing::{CheckoutHandoff, CheckoutRoute};
