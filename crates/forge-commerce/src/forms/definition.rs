//! The site's lead forms and their field contracts.

use serde::{Deserialize, Serialize};

/// A named lead form.
///
/// The receiving endpoint distinguishes forms by the `form-name` field, so
/// the wire name here must match what it is configured to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadForm {
    /// General contact form.
    Contact,
    /// On-site service request.
    ServiceRequest,
    /// Part sourcing request (the only form accepting a photo attachment).
    PartsRequest,
}

impl LeadForm {
    /// The wire value of the `form-name` field.
    pub fn form_name(&self) -> &'static str {
        match self {
            LeadForm::Contact => "contact",
            LeadForm::ServiceRequest => "service-request",
            LeadForm::PartsRequest => "parts-request",
        }
    }

    /// Fields that must be non-empty before submission is attempted.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            LeadForm::Contact => &["name", "email", "phone", "subject", "message"],
            LeadForm::ServiceRequest => &["name", "phone", "email", "location", "service"],
            LeadForm::PartsRequest => &[
                "contact_name",
                "phone",
                "email",
                "year",
                "make",
                "model",
                "part_needed",
            ],
        }
    }

    /// Whether this form may carry a photo attachment.
    pub fn accepts_attachment(&self) -> bool {
        matches!(self, LeadForm::PartsRequest)
    }
}

/// How soon a requested part is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Urgency {
    /// 3-5 days.
    #[default]
    Standard,
    /// 1-2 days.
    Urgent,
    /// Same day.
    Emergency,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Standard => "standard",
            Urgency::Urgent => "urgent",
            Urgency::Emergency => "emergency",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(Urgency::Standard),
            "urgent" => Some(Urgency::Urgent),
            "emergency" => Some(Urgency::Emergency),
            _ => None,
        }
    }

    /// Label shown in the urgency picker.
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Standard => "Standard (3-5 days)",
            Urgency::Urgent => "Urgent (1-2 days)",
            Urgency::Emergency => "Emergency (Same day)",
        }
    }

    pub fn all() -> &'static [Urgency] {
        &[Urgency::Standard, Urgency::Urgent, Urgency::Emergency]
    }
}

/// How a requested part should reach the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Delivery {
    #[default]
    Pickup,
    /// Delivered locally by the shop.
    Delivery,
    /// Shipped to an address.
    Ship,
}

impl Delivery {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delivery::Pickup => "pickup",
            Delivery::Delivery => "delivery",
            Delivery::Ship => "ship",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pickup" => Some(Delivery::Pickup),
            "delivery" => Some(Delivery::Delivery),
            "ship" => Some(Delivery::Ship),
            _ => None,
        }
    }

    /// Label shown in the delivery picker.
    pub fn label(&self) -> &'static str {
        match self {
            Delivery::Pickup => "Pickup",
            Delivery::Delivery => "Local Delivery",
            Delivery::Ship => "Ship to Address",
        }
    }

    pub fn all() -> &'static [Delivery] {
        &[Delivery::Pickup, Delivery::Delivery, Delivery::Ship]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_names() {
        assert_eq!(LeadForm::Contact.form_name(), "contact");
        assert_eq!(LeadForm::ServiceRequest.form_name(), "service-request");
        assert_eq!(LeadForm::PartsRequest.form_name(), "parts-request");
    }

    #[test]
    fn test_only_parts_request_accepts_attachment() {
        assert!(LeadForm::PartsRequest.accepts_attachment());
        assert!(!LeadForm::Contact.accepts_attachment());
        assert!(!LeadForm::ServiceRequest.accepts_attachment());
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(Urgency::Standard.as_str(), "standard");
        assert_eq!(Urgency::Urgent.as_str(), "urgent");
        assert_eq!(Urgency::Emergency.as_str(), "emergency");
        assert_eq!(Delivery::Pickup.as_str(), "pickup");
        assert_eq!(Delivery::Delivery.as_str(), "delivery");
        assert_eq!(Delivery::Ship.as_str(), "ship");
    }

    #[test]
    fn test_enum_from_str_round_trip() {
        for u in Urgency::all() {
            assert_eq!(Urgency::from_str(u.as_str()), Some(*u));
        }
        for d in Delivery::all() {
            assert_eq!(Delivery::from_str(d.as_str()), Some(*d));
        }
        assert_eq!(Urgency::from_str("whenever"), None);
        assert_eq!(Delivery::from_str("teleport"), None);
    }
}
