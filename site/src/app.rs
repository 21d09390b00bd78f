//! Application root and routing.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Footer, Header, ToastHost};
use crate::pages::{
    AboutPage, CartPage, ContactPage, FleetContractsPage, HomePage, NotFound,
    OrderConfirmationPage, PartsPage, ServicesPage,
};
use crate::store::{CartStore, ToastStore};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Root-owned stores; every page reaches them through context.
    CartStore::provide();
    ToastStore::provide();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta
            name="description"
            content="Mobile truck repair, preventative maintenance, detailing, and parts for Northern Virginia fleets."
        />
        <Title text="FleetForge Truck Solutions | Mobile Truck Repair"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/services") view=ServicesPage/>
                    <Route path=path!("/fleet-contracts") view=FleetContractsPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/parts") view=PartsPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/order-confirmation") view=OrderConfirmationPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
        </Router>
    }
}
