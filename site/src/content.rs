//! Static page content.
//!
//! Copy and lists rendered by the marketing pages. Data only; the pages
//! own the markup.

use serde::{Deserialize, Serialize};

/// A service card on the home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub link: String,
}

impl ServiceCard {
    pub fn new(icon: &str, title: &str, description: &str, link: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            link: link.to_string(),
        }
    }
}

/// The four home-page service cards.
pub fn home_services() -> Vec<ServiceCard> {
    vec![
        ServiceCard::new(
            "\u{1f527}",
            "Mobile Repair",
            "Diagnostics, electrical, brakes, and mechanical repairs at your location.",
            "/services",
        ),
        ServiceCard::new(
            "\u{1f6e1}",
            "Preventative Maintenance",
            "Scheduled PM services to keep your fleet running and compliant.",
            "/services",
        ),
        ServiceCard::new(
            "\u{1f4a7}",
            "Truck Detailing",
            "Professional truck and trailer cleaning to maintain your image.",
            "/services",
        ),
        ServiceCard::new(
            "\u{1f4e6}",
            "Parts Support",
            "Quality parts sourced fast with VIN-based accuracy.",
            "/parts",
        ),
    ]
}

/// A full service category on the services page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
}

impl ServiceCategory {
    pub fn new(icon: &str, title: &str, description: &str, items: &[&str]) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            items: items.iter().map(|i| i.to_string()).collect(),
        }
    }
}

/// The services-page categories.
pub fn service_categories() -> Vec<ServiceCategory> {
    vec![
        ServiceCategory::new(
            "\u{1f527}",
            "Diagnostics & Minor Repairs",
            "On-site troubleshooting and repairs to get you back on the road.",
            &[
                "Electrical system diagnostics",
                "Check engine light diagnosis",
                "Brake inspections and adjustments",
                "Air system troubleshooting",
                "Basic mechanical repairs",
                "Lighting and wiring fixes",
                "Battery testing and replacement",
                "Starter and alternator service",
            ],
        ),
        ServiceCategory::new(
            "\u{1f6e1}",
            "Preventative Maintenance (PM)",
            "Keep your fleet compliant and running efficiently.",
            &[
                "Oil and filter changes",
                "Fuel filter replacement",
                "Air filter service",
                "DOT inspections",
                "Fluid level checks and top-offs",
                "Belt and hose inspections",
                "Tire pressure checks",
                "PM scheduling and tracking",
            ],
        ),
        ServiceCategory::new(
            "\u{1f4a7}",
            "Detailing Services",
            "Professional cleaning to maintain your fleet's image.",
            &[
                "Exterior truck wash",
                "Interior cab cleaning",
                "Trailer washouts",
                "Engine bay degreasing",
                "Aluminum polishing",
                "Chrome detailing",
                "Fleet wash programs",
                "Custom detailing packages",
            ],
        ),
        ServiceCategory::new(
            "\u{1f4e6}",
            "Parts Sourcing",
            "Quality parts delivered fast with VIN-accurate matching.",
            &[
                "OEM parts sourcing",
                "Aftermarket alternatives",
                "Hard-to-find parts",
                "VIN-based part matching",
                "Same-day availability",
                "Competitive pricing",
                "Warranty support",
                "Direct delivery to your location",
            ],
        ),
    ]
}

/// A customer testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub company: String,
}

impl Testimonial {
    pub fn new(quote: &str, author: &str, company: &str) -> Self {
        Self {
            quote: quote.to_string(),
            author: author.to_string(),
            company: company.to_string(),
        }
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "FleetForge saved us thousands in towing costs this year. They come to our yard and handle everything quickly.",
            "Mike R.",
            "R&M Logistics",
        ),
        Testimonial::new(
            "The PM program keeps our trucks on the road. Professional, reliable, and they actually show up when they say they will.",
            "Sarah T.",
            "Capital Freight",
        ),
        Testimonial::new(
            "Finding the right parts used to be a nightmare. FleetForge sources exactly what we need, fast.",
            "James L.",
            "Owner-Operator",
        ),
    ]
}

/// A frequently asked question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

pub fn faqs() -> Vec<Faq> {
    vec![
        Faq::new(
            "What areas do you serve?",
            "We serve all of Northern Virginia including Ashburn, Sterling, Leesburg, Herndon, Reston, Chantilly, Fairfax, Tysons, Alexandria, Arlington, Manassas, and Woodbridge.",
        ),
        Faq::new(
            "Do you offer 24/7 emergency service?",
            "Our regular hours are 7:00 AM to 9:00 PM, seven days a week. We don't offer 24/7 emergency roadside service, but we respond quickly during business hours.",
        ),
        Faq::new(
            "How quickly can you respond to a service call?",
            "Response times depend on our schedule and your location, but we prioritize keeping your downtime short and typically respond same-day within our service area.",
        ),
        Faq::new(
            "Do you work on all truck makes and models?",
            "Yes. We service all major brands including International, Freightliner, Isuzu, Hino, GMC, Ford, and more.",
        ),
    ]
}

/// An audience block on the fleet-contracts page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetAudience {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl FleetAudience {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

pub fn fleet_audiences() -> Vec<FleetAudience> {
    vec![
        FleetAudience::new(
            "\u{1f464}",
            "Owner-Operators",
            "Single-truck operators who want reliable, scheduled maintenance without the hassle.",
        ),
        FleetAudience::new(
            "\u{1f69a}",
            "Small Fleets",
            "Businesses with 2-20 trucks looking for cost-effective fleet maintenance.",
        ),
        FleetAudience::new(
            "\u{1f3e2}",
            "Commercial Fleets",
            "Large operations needing comprehensive fleet management and priority support.",
        ),
    ]
}

/// Everything a fleet contract includes.
pub fn fleet_inclusions() -> Vec<String> {
    [
        "Priority scheduling and response times",
        "Discounted labor and parts rates",
        "Customized PM schedules based on your needs",
        "Dedicated account manager",
        "Detailed maintenance records and reporting",
        "Emergency repair priority",
        "Flexible payment terms",
        "Fleet-wide tracking and reminders",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// A fleet-contract pricing tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub highlighted: bool,
}

impl PricingTier {
    pub fn new(name: &str, description: &str, features: &[&str], highlighted: bool) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            highlighted,
        }
    }
}

pub fn pricing_tiers() -> Vec<PricingTier> {
    vec![
        PricingTier::new(
            "Basic",
            "For owner-operators and small fleets",
            &[
                "Monthly PM visits",
                "10% parts discount",
                "Priority scheduling",
                "Basic reporting",
            ],
            false,
        ),
        PricingTier::new(
            "Standard",
            "Our most popular fleet program",
            &[
                "Bi-weekly PM visits",
                "15% parts discount",
                "Same-day emergency response",
                "Full maintenance reporting",
                "Dedicated account rep",
            ],
            true,
        ),
        PricingTier::new(
            "Enterprise",
            "For large commercial operations",
            &[
                "Custom visit schedules",
                "20% parts discount",
                "Guaranteed response times",
                "Full fleet analytics",
                "On-site coordinator",
            ],
            false,
        ),
    ]
}

/// A value proposition on the about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueProp {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl ValueProp {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

pub fn company_values() -> Vec<ValueProp> {
    vec![
        ValueProp::new(
            "\u{23f1}",
            "Reliability",
            "We show up when we say we will, and we get the job done right the first time.",
        ),
        ValueProp::new(
            "\u{1f6e1}",
            "Trust",
            "Transparent pricing, honest assessments, and no unnecessary upsells.",
        ),
        ValueProp::new(
            "\u{1f3af}",
            "Efficiency",
            "We minimize your downtime with fast response times and efficient repairs.",
        ),
        ValueProp::new(
            "\u{1f91d}",
            "Partnership",
            "We treat every customer like a partner, invested in your success.",
        ),
    ]
}

/// A headline stat on the about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

pub fn company_stats() -> Vec<Stat> {
    vec![
        Stat::new("NoVA", "Service Area"),
        Stat::new("7 Days", "Weekly Coverage"),
        Stat::new("7AM-9PM", "Business Hours"),
        Stat::new("Fast", "Response Time"),
    ]
}

/// Trust badges shown under hero sections.
pub fn trust_badges() -> Vec<String> {
    [
        "Fully Insured",
        "Professional Service",
        "Mobile Fleet",
        "All Truck Brands",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_service_card_links_to_a_page() {
        for card in home_services() {
            assert!(card.link.starts_with('/'));
        }
    }

    #[test]
    fn test_exactly_one_highlighted_tier() {
        let highlighted = pricing_tiers().iter().filter(|t| t.highlighted).count();
        assert_eq!(highlighted, 1);
    }
}
