//! FleetForge Truck Solutions site.
//!
//! Client-side rendered Leptos app: marketing pages, the parts shop with
//! its in-page cart, lead-generation forms, and the checkout hand-off to
//! hosted payment links. All state lives in the page and resets on reload.

mod app;
mod components;
mod content;
mod pages;
mod store;
mod submit;

pub use app::App;
pub use store::{CartStore, ToastStore};
pub use submit::{submit_lead_form, SubmitError};
