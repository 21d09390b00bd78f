//! Fleet contracts page.

use leptos::prelude::*;

use crate::components::{HeroSection, SectionHeader};
use crate::content;

#[component]
pub fn FleetContractsPage() -> impl IntoView {
    view! {
        <HeroSection
            badge="Fleet Programs"
            title="Fleet Contracts & Yard Programs"
            subtitle="Maximize uptime with predictable maintenance costs, priority service, and a dedicated team focused on keeping your fleet running."
        >
            <div class="hero-actions">
                <a href="/contact" class="btn-primary">"Get a Custom Quote"</a>
            </div>
        </HeroSection>

        <section class="page-section">
            <SectionHeader
                badge="Who It's For"
                title="Programs for Every Fleet Size"
                subtitle="From a single truck to a full commercial yard."
            />
            <div class="card-grid">
                {content::fleet_audiences()
                    .into_iter()
                    .map(|a| view! {
                        <div class="feature-card">
                            <span class="feature-icon">{a.icon}</span>
                            <h3 class="feature-title">{a.title}</h3>
                            <p class="feature-description">{a.description}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="page-section alt">
            <SectionHeader
                badge="What's Included"
                title="Every Contract Comes With"
                subtitle="The baseline for all fleet programs."
            />
            <ul class="inclusion-list">
                {content::fleet_inclusions()
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </section>

        <section class="page-section">
            <SectionHeader
                badge="Programs"
                title="Pick the Level That Fits"
                subtitle="Custom quotes for every tier; pricing depends on fleet size and schedule."
            />
            <div class="card-grid">
                {content::pricing_tiers()
                    .into_iter()
                    .map(|tier| {
                        let class = if tier.highlighted {
                            "pricing-tier highlighted"
                        } else {
                            "pricing-tier"
                        };
                        view! {
                            <div class=class>
                                <h3>{tier.name}</h3>
                                <p class="feature-description">{tier.description}</p>
                                <ul class="tier-features">
                                    {tier
                                        .features
                                        .into_iter()
                                        .map(|f| view! { <li>{f}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <a href="/contact" class="btn-outline">"Get a Quote"</a>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
