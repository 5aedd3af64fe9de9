// src/backend/client.rs
use crate::backend::wire::{decode_listings, PropertyResponse};
use crate::backend::{
    BackendError, InquirySubmitter, ListingScope, ListingSource, PaymentRedirectVerifier,
    SiteContentSource,
};
use crate::domain::{
    CheckoutSession, ContactInformation, ContactMessage, ListingRecord, PlanModification,
    QuoteRequest, ReceiptDocument, Service, SiteSettings, TeamMember, Testimonial,
};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_DISPOSITION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("plan_storefront/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the backend REST API.
///
/// Every call is a single request: no retries, failures go straight back
/// to the caller.
#[derive(Clone)]
pub struct HttpBackend {
    base: Url,
    client: Client,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base: normalize_base(base_url)?,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    fn fetch(&self, path: &str) -> Result<Response, BackendError> {
        let url = self.endpoint(path)?;
        let start = Instant::now();
        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()?;
        debug!(%url, status = resp.status().as_u16(), elapsed = ?start.elapsed(), "backend GET");
        check_status(resp)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let body = self.fetch(path)?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn post_json<P: Serialize + ?Sized>(&self, path: &str, payload: &P) -> Result<Response, BackendError> {
        let url = self.endpoint(path)?;
        let start = Instant::now();
        let resp = self.client.post(url.clone()).json(payload).send()?;
        debug!(%url, status = resp.status().as_u16(), elapsed = ?start.elapsed(), "backend POST");
        check_status(resp)
    }
}

/// `Url::join` drops the last path segment unless the base ends in `/`.
fn normalize_base(raw: &str) -> Result<Url, url::ParseError> {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("{trimmed}/"))
    }
}

fn check_status(resp: Response) -> Result<Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(BackendError::NotFound);
    }

    let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
    warn!(status = status.as_u16(), %body, "backend rejected request");
    Err(BackendError::Status {
        status: status.as_u16(),
        body,
    })
}

fn scope_path(scope: ListingScope) -> &'static str {
    match scope {
        ListingScope::All => "properties/",
        ListingScope::Plans => "properties/plans/",
        ListingScope::Built => "properties/built/",
    }
}

/// Pull `filename="..."` out of a Content-Disposition header.
fn attachment_filename(header: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|part| {
        let value = part.strip_prefix("filename=")?;
        let name = value.trim_matches('"').trim();
        (!name.is_empty() && !name.contains(['/', '\\'])).then(|| name.to_string())
    })
}

impl ListingSource for HttpBackend {
    fn list(&self, scope: ListingScope) -> Result<Vec<ListingRecord>, BackendError> {
        let body = self.fetch(scope_path(scope))?.text()?;
        let listings = decode_listings(&body)?;
        debug!(?scope, count = listings.len(), "fetched listings");
        Ok(listings)
    }

    fn get(&self, id: &str) -> Result<Option<ListingRecord>, BackendError> {
        // Ids end up in the path; anything odd cannot exist upstream.
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Ok(None);
        }

        match self.get_json::<PropertyResponse>(&format!("properties/{id}/")) {
            Ok(raw) => Ok(Some(raw.into())),
            Err(BackendError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl InquirySubmitter for HttpBackend {
    fn submit_contact(&self, message: &ContactMessage) -> Result<(), BackendError> {
        self.post_json("contact/", message)?;
        Ok(())
    }

    fn submit_quote(&self, request: &QuoteRequest) -> Result<(), BackendError> {
        self.post_json("quotes/", request)?;
        Ok(())
    }
}

impl PaymentRedirectVerifier for HttpBackend {
    fn create_checkout(
        &self,
        listing_id: &str,
        customer_email: Option<&str>,
    ) -> Result<CheckoutSession, BackendError> {
        let payload = json!({
            "plan_id": listing_id,
            "customer_email": customer_email,
        });
        let body = self.post_json("orders/checkout/", &payload)?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn confirm_success(&self, order_id: &str) -> Result<(), BackendError> {
        self.post_json("orders/success/", &json!({ "order_id": order_id }))?;
        Ok(())
    }

    fn confirm_cancel(&self, order_id: &str) -> Result<(), BackendError> {
        self.post_json("orders/cancel/", &json!({ "order_id": order_id }))?;
        Ok(())
    }

    fn fetch_receipt(&self, order_id: &str) -> Result<ReceiptDocument, BackendError> {
        let resp = self.fetch(&format!("orders/{order_id}/receipt/"))?;

        let filename = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(attachment_filename)
            .unwrap_or_else(|| ReceiptDocument::default_filename(order_id));

        let bytes = resp.bytes()?.to_vec();
        Ok(ReceiptDocument { filename, bytes })
    }
}

impl SiteContentSource for HttpBackend {
    fn settings(&self) -> Result<SiteSettings, BackendError> {
        self.get_json("settings/settings/")
    }

    fn contact_info(&self) -> Result<ContactInformation, BackendError> {
        self.get_json("settings/contact-info/")
    }

    fn team(&self) -> Result<Vec<TeamMember>, BackendError> {
        let mut team: Vec<TeamMember> = self.get_json("settings/team/")?;
        team.sort_by_key(|m| m.order);
        Ok(team)
    }

    fn testimonials(&self) -> Result<Vec<Testimonial>, BackendError> {
        self.get_json("settings/testimonials/")
    }

    fn services(&self) -> Result<Vec<Service>, BackendError> {
        Ok(active_services(self.get_json("settings/services/")?))
    }

    fn plan_modifications(&self) -> Result<Vec<PlanModification>, BackendError> {
        let mut mods: Vec<PlanModification> = self.get_json("settings/plan-modifications/")?;
        mods.sort_by_key(|m| m.order);
        Ok(mods)
    }
}

fn active_services(mut services: Vec<Service>) -> Vec<Service> {
    services.retain(|s| s.is_active);
    services.sort_by_key(|s| s.order);
    services
}
