mod backend_error;
mod client;
mod seed;
pub mod wire;

pub use backend_error::BackendError;
pub use client::HttpBackend;
pub use seed::SeedListings;

use crate::domain::{
    CheckoutSession, ContactInformation, ContactMessage, ListingRecord, PlanModification,
    QuoteRequest, ReceiptDocument, Service, SiteSettings, TeamMember, Testimonial,
};

/// Which slice of the catalog to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingScope {
    All,
    Plans,
    Built,
}

pub trait ListingSource: Send + Sync {
    fn list(&self, scope: ListingScope) -> Result<Vec<ListingRecord>, BackendError>;

    /// `Ok(None)` when the id is unknown.
    fn get(&self, id: &str) -> Result<Option<ListingRecord>, BackendError>;
}

pub trait InquirySubmitter: Send + Sync {
    fn submit_contact(&self, message: &ContactMessage) -> Result<(), BackendError>;
    fn submit_quote(&self, request: &QuoteRequest) -> Result<(), BackendError>;
}

pub trait PaymentRedirectVerifier: Send + Sync {
    fn create_checkout(
        &self,
        listing_id: &str,
        customer_email: Option<&str>,
    ) -> Result<CheckoutSession, BackendError>;
    fn confirm_success(&self, order_id: &str) -> Result<(), BackendError>;
    fn confirm_cancel(&self, order_id: &str) -> Result<(), BackendError>;
    fn fetch_receipt(&self, order_id: &str) -> Result<ReceiptDocument, BackendError>;
}

pub trait SiteContentSource: Send + Sync {
    fn settings(&self) -> Result<SiteSettings, BackendError>;
    fn contact_info(&self) -> Result<ContactInformation, BackendError>;
    fn team(&self) -> Result<Vec<TeamMember>, BackendError>;
    fn testimonials(&self) -> Result<Vec<Testimonial>, BackendError>;

    /// Active services in display order.
    fn services(&self) -> Result<Vec<Service>, BackendError>;
    fn plan_modifications(&self) -> Result<Vec<PlanModification>, BackendError>;
}
