//! Product types.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
///
/// A newtype keeps product ids from being mixed up with other strings
/// (form field names, checkout URLs) at the type level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Create an ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A purchasable part in the catalog.
///
/// Immutable and catalog-defined: the catalog is the source of truth for
/// the price, name and image metadata copied into the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Manufacturer part number (display string).
    pub part_number: String,
    /// Image asset path.
    pub image: String,
    /// Externally hosted, fixed-price checkout page for this product.
    /// Opaque to the catalog; reachability is not validated.
    pub checkout_link: String,
}

impl Product {
    /// Create a catalog product.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        part_number: impl Into<String>,
        image: impl Into<String>,
        checkout_link: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            part_number: part_number.into(),
            image: image.into(),
            checkout_link: checkout_link.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        let id = ProductId::new("bumper-isuzu-gmc");
        assert_eq!(id.as_str(), "bumper-isuzu-gmc");
        assert_eq!(format!("{}", id), "bumper-isuzu-gmc");
    }

    #[test]
    fn test_product_id_equality() {
        assert_eq!(ProductId::new("same"), ProductId::from("same"));
        assert_ne!(ProductId::new("a"), ProductId::new("b"));
    }
}
