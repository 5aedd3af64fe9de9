pub mod catalog;
pub mod contact;
pub mod details;
pub mod error;
pub mod home;
pub mod payment;
pub mod quote;
pub mod services;

pub use catalog::{catalog_page, CatalogVm};
pub use contact::{contact_page, ContactVm};
pub use details::{details_page, listing_not_found_page};
pub use error::error_page;
pub use home::{home_page, HomeVm};
pub use payment::{checkout_failed_page, payment_cancel_page, payment_success_page};
pub use quote::{quote_page, QuoteVm};
pub use services::{services_page, ServicesVm};
