//! Domain error types.

use thiserror::Error;

/// Errors from the checkout hand-off policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout was requested for an empty cart. The UI keeps checkout
    /// unreachable in this state, so hitting it is a precondition violation.
    #[error("checkout requires a non-empty cart")]
    EmptyCart,
}

/// Errors from lead-form validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field is missing or empty after trimming.
    #[error("required field is empty: {0}")]
    MissingField(&'static str),
}
