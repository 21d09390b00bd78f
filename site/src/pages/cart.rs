//! Cart page: line-item editing, order summary, and checkout hand-off.

use forge_commerce::business;
use forge_commerce::prelude::*;
use leptos::prelude::*;

use crate::store::CartStore;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = CartStore::expect();

    view! {
        <section class="page-section cart-page">
            {move || {
                if cart.is_empty() {
                    view! { <EmptyCart/> }.into_any()
                } else {
                    view! { <CartContents/> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="empty-cart">
            <h1>"Your Cart is Empty"</h1>
            <p>"Browse our parts catalog to find what you need."</p>
            <a href="/parts" class="btn-primary">"Shop Parts"</a>
        </div>
    }
}

#[component]
fn CartContents() -> impl IntoView {
    let cart = CartStore::expect();

    view! {
        <a href="/parts" class="back-link">"\u{2190} Continue Shopping"</a>
        <h1>"Your Cart"</h1>

        <div class="cart-layout">
            <div class="cart-lines">
                {move || {
                    cart.items()
                        .into_iter()
                        .map(|item| view! { <CartLine item/> })
                        .collect::<Vec<_>>()
                }}
                <button type="button" class="btn-text" on:click=move |_| cart.clear()>
                    "Clear Cart"
                </button>
            </div>

            <OrderSummary/>
        </div>
    }
}

#[component]
fn CartLine(item: LineItem) -> impl IntoView {
    let cart = CartStore::expect();

    let quantity = item.quantity as i64;
    let remove_id = item.product.id.clone();
    let dec_id = item.product.id.clone();
    let inc_id = item.product.id.clone();

    view! {
        <div class="cart-line">
            <div class="cart-line-media">
                <img src=item.product.image.clone() alt=item.product.name.clone()/>
            </div>
            <div class="cart-line-info">
                <h3>{item.product.name.clone()}</h3>
                <p class="part-number">"Part #: "{item.product.part_number.clone()}</p>
                <p class="price">{item.product.price.display()}</p>
            </div>
            <div class="cart-line-controls">
                <button
                    type="button"
                    class="btn-text remove"
                    on:click=move |_| cart.remove(&remove_id)
                >
                    "Remove"
                </button>
                <div class="quantity-stepper">
                    <button type="button" on:click=move |_| cart.set_quantity(&dec_id, quantity - 1)>
                        "\u{2212}"
                    </button>
                    <span class="quantity-value">{item.quantity}</span>
                    <button type="button" on:click=move |_| cart.set_quantity(&inc_id, quantity + 1)>
                        "+"
                    </button>
                </div>
                <p class="line-subtotal">"Subtotal: "{item.line_subtotal().display()}</p>
            </div>
        </div>
    }
}

#[component]
fn OrderSummary() -> impl IntoView {
    let cart = CartStore::expect();

    view! {
        <div class="order-summary">
            <h2>"Order Summary"</h2>

            {move || {
                let pricing = cart.pricing();
                view! {
                    <div class="summary-rows">
                        <div class="summary-row">
                            <span>"Subtotal"</span>
                            <span>{pricing.subtotal.display()}</span>
                        </div>
                        <div class="summary-row muted">
                            <span>"Processing & Handling"</span>
                            <span>{pricing.processing_fee.display()}</span>
                        </div>
                        <div class="summary-row total">
                            <span>"Total"</span>
                            <span>{pricing.total.display()}</span>
                        </div>
                    </div>
                }
            }}

            <CheckoutActions/>

            <p class="summary-note">"Secure checkout powered by Stripe"</p>
        </div>
    }
}

/// The hand-off controls: a single button for one distinct item, a
/// per-item link list when a combined checkout is impossible.
#[component]
fn CheckoutActions() -> impl IntoView {
    let cart = CartStore::expect();

    move || match cart.checkout_route() {
        Ok(CheckoutRoute::Direct(handoff)) => {
            let url = handoff.url.clone();
            view! {
                <button
                    type="button"
                    class="btn-primary checkout-button"
                    on:click=move |_| open_checkout(&url)
                >
                    "Proceed to Checkout"
                </button>
            }
            .into_any()
        }
        Ok(CheckoutRoute::PerItem(handoffs)) => view! {
            <div class="per-item-checkout">
                <p class="checkout-note">
                    "There's no combined checkout for multiple items. Check out each item individually, or "
                    <a href=business::PHONE_HREF>"call/text us at "{business::PHONE_DISPLAY}</a>
                    " to arrange your order."
                </p>
                {handoffs
                    .into_iter()
                    .map(|handoff| {
                        let url = handoff.url.clone();
                        view! {
                            <button
                                type="button"
                                class="btn-outline checkout-item"
                                on:click=move |_| open_checkout(&url)
                            >
                                {handoff.product_name}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        // The page renders the empty state before checkout is reachable.
        Err(CheckoutError::EmptyCart) => ().into_any(),
    }
}

/// Open a hosted payment page in a new browsing context.
fn open_checkout(url: &str) {
    if window().open_with_url_and_target(url, "_blank").is_err() {
        tracing::warn!(url, "failed to open checkout page");
    }
}
