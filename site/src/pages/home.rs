//! Home page.

use forge_commerce::business;
use leptos::prelude::*;

use crate::components::{HeroSection, SectionHeader};
use crate::content;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroSection
            badge="Mobile Truck Repair"
            title="We Come to You. Your Fleet Stays Moving."
            subtitle="On-site repair, preventative maintenance, detailing, and parts for owner-operators and commercial fleets across Northern Virginia."
        >
            <div class="hero-actions">
                <a href=business::PHONE_HREF class="btn-primary">"Call " {business::PHONE_DISPLAY}</a>
                <a href="/services" class="btn-outline-light">"Request Service"</a>
            </div>
            <TrustBadges/>
        </HeroSection>

        <section class="page-section">
            <SectionHeader
                badge="What We Do"
                title="Services Built Around Uptime"
                subtitle="Everything your trucks need, brought to your yard or roadside."
            />
            <div class="card-grid">
                {content::home_services()
                    .into_iter()
                    .map(|s| view! {
                        <a href=s.link class="feature-card">
                            <span class="feature-icon">{s.icon}</span>
                            <h3 class="feature-title">{s.title}</h3>
                            <p class="feature-description">{s.description}</p>
                        </a>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="page-section alt">
            <SectionHeader
                badge="Coverage"
                title="Serving Northern Virginia"
                subtitle="Mobile service across the region, seven days a week."
            />
            <div class="chip-row">
                {business::SERVICE_AREAS
                    .iter()
                    .map(|area| view! { <span class="chip">{*area}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="page-section">
            <SectionHeader
                badge="Testimonials"
                title="Fleets That Count on Us"
                subtitle="What our customers say about working with FleetForge."
            />
            <div class="card-grid">
                {content::testimonials()
                    .into_iter()
                    .map(|t| view! {
                        <div class="testimonial-card">
                            <p class="testimonial-quote">"\u{201c}" {t.quote} "\u{201d}"</p>
                            <p class="testimonial-author">{t.author} " \u{b7} " {t.company}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="page-section alt">
            <SectionHeader
                badge="FAQ"
                title="Common Questions"
                subtitle="Quick answers before you call."
            />
            <div class="faq-list">
                {content::faqs()
                    .into_iter()
                    .map(|f| view! {
                        <details class="faq-item">
                            <summary>{f.question}</summary>
                            <p>{f.answer}</p>
                        </details>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="cta-section">
            <div class="cta-content">
                <h2 class="cta-headline">"Truck Down? Get It Back on the Road."</h2>
                <p class="cta-subheadline">"Call or text now and we'll get a technician headed your way."</p>
                <div class="cta-buttons">
                    <a href=business::PHONE_HREF class="btn-primary">{business::PHONE_DISPLAY}</a>
                    <a href="/contact" class="btn-outline-light">"Send a Message"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TrustBadges() -> impl IntoView {
    view! {
        <div class="trust-badges">
            {content::trust_badges()
                .into_iter()
                .map(|badge| view! { <span class="trust-badge">{badge}</span> })
                .collect::<Vec<_>>()}
        </div>
    }
}
