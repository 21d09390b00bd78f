//! Order confirmation page, linked from the hosted checkout's success
//! redirect. Purely informational; no order state exists client-side.

use forge_commerce::business;
use leptos::prelude::*;

#[component]
pub fn OrderConfirmationPage() -> impl IntoView {
    view! {
        <section class="page-section confirmation">
            <div class="confirmation-card">
                <span class="confirmation-icon">"\u{2713}"</span>
                <h1>"Thank You for Your Order!"</h1>
                <p class="confirmation-lede">"Your order has been confirmed and is being processed."</p>

                <div class="confirmation-next">
                    <h2>"What's Next?"</h2>
                    <ul>
                        <li>"You will receive your receipt and invoice by email shortly."</li>
                        <li>"We'll contact you if we need any additional information."</li>
                        <li>"Your order will be prepared and shipped within 1-2 business days."</li>
                    </ul>
                </div>

                <div class="confirmation-actions">
                    <a href="/parts" class="btn-primary">"Continue Shopping"</a>
                    <a href="/" class="btn-outline">"Return Home"</a>
                </div>

                <p class="confirmation-contact">
                    "Questions about your order? "
                    <a href=business::PHONE_HREF>{business::PHONE_DISPLAY}</a>
                </p>
            </div>
        </section>
    }
}
