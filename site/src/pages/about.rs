//! About page.

use forge_commerce::business;
use leptos::prelude::*;

use crate::components::{HeroSection, SectionHeader};
use crate::content;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <HeroSection
            badge="About FleetForge"
            title="Keeping Your Fleet Moving"
            subtitle="FleetForge Truck Solutions provides professional mobile repair, maintenance, and parts support to owner-operators and commercial fleets across Northern Virginia."
        >
            <div class="hero-actions">
                <a href="/contact" class="btn-primary">"Contact Us"</a>
                <a href=business::PHONE_HREF class="btn-outline-light">"Call Now"</a>
            </div>
        </HeroSection>

        <section class="stats-band">
            {content::company_stats()
                .into_iter()
                .map(|s| view! {
                    <div class="stat">
                        <span class="stat-value">{s.value}</span>
                        <span class="stat-label">{s.label}</span>
                    </div>
                })
                .collect::<Vec<_>>()}
        </section>

        <section class="page-section">
            <SectionHeader
                badge="Our Values"
                title="How We Work"
                subtitle="The standards behind every service call."
            />
            <div class="card-grid">
                {content::company_values()
                    .into_iter()
                    .map(|v| view! {
                        <div class="feature-card">
                            <span class="feature-icon">{v.icon}</span>
                            <h3 class="feature-title">{v.title}</h3>
                            <p class="feature-description">{v.description}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="cta-section">
            <div class="cta-content">
                <h2 class="cta-headline">"Work With a Team That Shows Up"</h2>
                <p class="cta-subheadline">
                    "Open " {business::HOURS_DAYS} ", " {business::HOURS} "."
                </p>
                <div class="cta-buttons">
                    <a href=business::PHONE_HREF class="btn-primary">{business::PHONE_DISPLAY}</a>
                </div>
            </div>
        </section>
    }
}
