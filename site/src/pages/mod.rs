//! Site pages.

mod about;
mod cart;
mod confirmation;
mod contact;
mod fleet;
mod home;
mod not_found;
mod parts;
mod services;

pub use about::AboutPage;
pub use cart::CartPage;
pub use confirmation::OrderConfirmationPage;
pub use contact::ContactPage;
pub use fleet::FleetContractsPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use parts::PartsPage;
pub use services::ServicesPage;
