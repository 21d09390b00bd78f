//! 404 page.

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="page-section not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/" class="btn-primary">"Back to Home"</a>
        </section>
    }
}
