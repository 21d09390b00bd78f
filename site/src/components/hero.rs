//! Page hero banner.

use leptos::prelude::*;

/// Full-width hero with badge, headline and optional children (CTAs).
#[component]
pub fn HeroSection(
    badge: &'static str,
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content">
                <span class="hero-badge">{badge}</span>
                <h1 class="hero-headline">{title}</h1>
                <p class="hero-subheadline">{subtitle}</p>
                {children.map(|c| c())}
            </div>
        </section>
    }
}
