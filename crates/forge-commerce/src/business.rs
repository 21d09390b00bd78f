//! Business contact constants surfaced throughout the site.
//!
//! Static configuration, not computed. The phone number doubles as the
//! fallback channel when a form submission fails.

/// Phone number as displayed.
pub const PHONE_DISPLAY: &str = "(571) 206-2249";

/// Phone number as a `tel:` href.
pub const PHONE_HREF: &str = "tel:5712062249";

/// Contact email address.
pub const EMAIL: &str = "info@fleetforgetrucks.com";

/// Public website URL.
pub const WEBSITE_URL: &str = "https://fleetforgetrucks.com";

/// Website as displayed.
pub const WEBSITE_DISPLAY: &str = "fleetforgetrucks.com";

/// Days the shop operates.
pub const HOURS_DAYS: &str = "Monday - Sunday";

/// Daily operating hours.
pub const HOURS: &str = "7:00 AM - 9:00 PM";

/// Northern Virginia towns covered by the mobile service.
pub const SERVICE_AREAS: &[&str] = &[
    "Ashburn",
    "Sterling",
    "Leesburg",
    "Herndon",
    "Reston",
    "Chantilly",
    "Fairfax",
    "Tysons",
    "Alexandria",
    "Arlington",
    "Manassas",
    "Woodbridge",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_href_matches_display_digits() {
        let digits: String = PHONE_DISPLAY.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(PHONE_HREF, format!("tel:{digits}"));
    }

    #[test]
    fn test_service_areas_are_nonempty_and_unique() {
        assert!(!SERVICE_AREAS.is_empty());
        for (i, a) in SERVICE_AREAS.iter().enumerate() {
            assert!(!SERVICE_AREAS[i + 1..].contains(a));
        }
    }
}
