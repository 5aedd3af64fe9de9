pub mod checkout;
pub mod inquiry;
pub mod listing;
pub mod site;

pub use checkout::{parse_order_id, CheckoutSession, ReceiptDocument};
pub use inquiry::{ContactForm, ContactMessage, InquiryError, QuoteForm, QuoteRequest};
pub use listing::{is_web_url, Category, ListingRecord};
pub use site::{
    ContactInformation, PlanModification, Service, SiteSettings, TeamMember, Testimonial,
};
