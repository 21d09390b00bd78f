//! Section heading block.

use leptos::prelude::*;

#[component]
pub fn SectionHeader(
    badge: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <span class="section-badge">{badge}</span>
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </div>
    }
}
