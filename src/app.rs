use crate::backend::{
    HttpBackend, InquirySubmitter, ListingSource, PaymentRedirectVerifier, SeedListings,
    SiteContentSource,
};
use crate::config::StorefrontConfig;
use crate::domain::{ContactInformation, SiteSettings, TeamMember, Testimonial};
use tracing::warn;

/// Collaborators and settings shared by every request.
pub struct Storefront {
    pub listings: Box<dyn ListingSource>,
    pub inquiries: Box<dyn InquirySubmitter>,
    pub payments: Box<dyn PaymentRedirectVerifier>,
    pub content: Box<dyn SiteContentSource>,
    pub page_size: usize,
}

impl Storefront {
    pub fn from_config(cfg: &StorefrontConfig) -> Result<Self, crate::backend::BackendError> {
        let http = HttpBackend::new(&cfg.backend_url, cfg.backend_timeout)?;

        let listings: Box<dyn ListingSource> = match &cfg.seed_path {
            Some(path) => Box::new(SeedListings::load(path)?),
            None => Box::new(http.clone()),
        };

        Ok(Self {
            listings,
            inquiries: Box::new(http.clone()),
            payments: Box::new(http.clone()),
            content: Box::new(http),
            page_size: cfg.page_size,
        })
    }

    pub fn settings_or_default(&self) -> SiteSettings {
        self.content.settings().unwrap_or_else(|e| {
            warn!(error = %e, "site settings unavailable, using defaults");
            SiteSettings::default()
        })
    }

    pub fn contact_info_or_default(&self) -> ContactInformation {
        self.content.contact_info().unwrap_or_else(|e| {
            warn!(error = %e, "contact info unavailable");
            ContactInformation::default()
        })
    }

    pub fn team_or_empty(&self) -> Vec<TeamMember> {
        self.content.team().unwrap_or_else(|e| {
            warn!(error = %e, "team unavailable");
            Vec::new()
        })
    }

    pub fn testimonials_or_empty(&self) -> Vec<Testimonial> {
        self.content.testimonials().unwrap_or_else(|e| {
            warn!(error = %e, "testimonials unavailable");
            Vec::new()
        })
    }
}
