//! Site header and footer.

use forge_commerce::business;
use leptos::prelude::*;

use crate::store::CartStore;

#[component]
pub fn Header() -> impl IntoView {
    let cart = CartStore::expect();

    view! {
        <header class="site-header">
            <nav class="nav-container">
                <a href="/" class="logo">"FleetForge"<span class="logo-accent">" Truck Solutions"</span></a>
                <div class="nav-links">
                    <a href="/">"Home"</a>
                    <a href="/services">"Services"</a>
                    <a href="/fleet-contracts">"Fleet Contracts"</a>
                    <a href="/parts">"Parts"</a>
                    <a href="/about">"About"</a>
                    <a href="/contact">"Contact"</a>
                </div>
                <div class="nav-actions">
                    <a href=business::PHONE_HREF class="nav-phone">{business::PHONE_DISPLAY}</a>
                    <a href="/cart" class="cart-link">
                        "Cart"
                        {move || {
                            let count = cart.total_items();
                            (count > 0)
                                .then(|| view! { <span class="cart-badge">{count}</span> })
                        }}
                    </a>
                </div>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-container">
                <div class="footer-brand">
                    <a href="/" class="logo">"FleetForge Truck Solutions"</a>
                    <p>"Mobile truck repair, maintenance, and parts for Northern Virginia fleets."</p>
                </div>
                <div class="footer-links">
                    <div class="footer-column">
                        <h4>"Services"</h4>
                        <a href="/services">"Mobile Repair"</a>
                        <a href="/services">"Preventative Maintenance"</a>
                        <a href="/fleet-contracts">"Fleet Contracts"</a>
                        <a href="/parts">"Parts & Supplies"</a>
                    </div>
                    <div class="footer-column">
                        <h4>"Company"</h4>
                        <a href="/about">"About"</a>
                        <a href="/contact">"Contact"</a>
                        <a href="/cart">"Cart"</a>
                    </div>
                    <div class="footer-column">
                        <h4>"Contact"</h4>
                        <a href=business::PHONE_HREF>{business::PHONE_DISPLAY}</a>
                        <a href=format!("mailto:{}", business::EMAIL)>{business::EMAIL}</a>
                        <a href=business::WEBSITE_URL target="_blank" rel="noopener noreferrer">
                            {business::WEBSITE_DISPLAY}
                        </a>
                        <p class="footer-hours">{business::HOURS_DAYS}", "{business::HOURS}</p>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>"\u{a9} 2025 FleetForge Truck Solutions. All rights reserved."</p>
            </div>
        </footer>
    }
}
