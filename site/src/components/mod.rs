//! Shared UI components.

mod form;
mod hero;
mod layout;
mod section;
mod toast;

pub use form::{TextAreaField, TextField};
pub use hero::HeroSection;
pub use layout::{Footer, Header};
pub use section::SectionHeader;
pub use toast::ToastHost;
