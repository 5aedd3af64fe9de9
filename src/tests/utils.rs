use crate::app::Storefront;
use crate::backend::{
    BackendError, InquirySubmitter, ListingScope, ListingSource, PaymentRedirectVerifier,
    SiteContentSource,
};
use crate::domain::{
    Category, CheckoutSession, ContactInformation, ContactMessage, ListingRecord,
    PlanModification, QuoteRequest, ReceiptDocument, Service, SiteSettings, TeamMember,
    Testimonial,
};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// Minimal plan listing: one of everything, 100 m².
pub fn listing(id: &str, price: f64) -> ListingRecord {
    ListingRecord {
        id: id.to_string(),
        title: format!("Plan {id}"),
        category: Category::Plan,
        price,
        bedrooms: 1,
        bathrooms: 1,
        garage: 1,
        levels: 1,
        floor_area: 100.0,
        width: 0.0,
        depth: 0.0,
        styles: Vec::new(),
        is_new: false,
        is_popular: false,
        images: Vec::new(),
        description: String::new(),
        features: Vec::new(),
        amenities: Vec::new(),
        video_url: None,
        en_suite: 0,
        lounges: 0,
        dining_areas: 0,
        garage_parking: 0,
        covered_parking: 0,
        pet_friendly: false,
        floors: Vec::new(),
    }
}

fn unavailable() -> BackendError {
    BackendError::Status {
        status: 503,
        body: "unavailable".into(),
    }
}

/// In-memory stand-in for the storefront backend.
///
/// Clones share the call log, so a test can hand clones to a `Storefront`
/// and still inspect what was called.
#[derive(Clone)]
pub struct FakeBackend {
    pub listings: Vec<ListingRecord>,
    pub fail_listings: bool,
    pub fail_submissions: bool,
    pub fail_payments: bool,
    pub fail_services: bool,
    pub redirect_url: String,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            listings: Vec::new(),
            fail_listings: false,
            fail_submissions: false,
            fail_payments: false,
            fail_services: false,
            redirect_url: "https://pay.example.com/session/abc".into(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FakeBackend {
    pub fn with_listings(listings: Vec<ListingRecord>) -> Self {
        Self {
            listings,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ListingSource for FakeBackend {
    fn list(&self, scope: ListingScope) -> Result<Vec<ListingRecord>, BackendError> {
        if self.fail_listings {
            return Err(unavailable());
        }
        Ok(self
            .listings
            .iter()
            .filter(|l| match scope {
                ListingScope::All => true,
                ListingScope::Plans => l.category == Category::Plan,
                ListingScope::Built => l.category == Category::Built,
            })
            .cloned()
            .collect())
    }

    fn get(&self, id: &str) -> Result<Option<ListingRecord>, BackendError> {
        if self.fail_listings {
            return Err(unavailable());
        }
        Ok(self.listings.iter().find(|l| l.id == id).cloned())
    }
}

impl InquirySubmitter for FakeBackend {
    fn submit_contact(&self, message: &ContactMessage) -> Result<(), BackendError> {
        self.record(format!("contact:{}", message.email));
        if self.fail_submissions {
            return Err(unavailable());
        }
        Ok(())
    }

    fn submit_quote(&self, request: &QuoteRequest) -> Result<(), BackendError> {
        self.record(format!("quote:{}", request.email));
        if self.fail_submissions {
            return Err(unavailable());
        }
        Ok(())
    }
}

impl PaymentRedirectVerifier for FakeBackend {
    fn create_checkout(
        &self,
        listing_id: &str,
        customer_email: Option<&str>,
    ) -> Result<CheckoutSession, BackendError> {
        self.record(format!(
            "checkout:{listing_id}:{}",
            customer_email.unwrap_or("-")
        ));
        if self.fail_payments {
            return Err(unavailable());
        }
        if !self.listings.iter().any(|l| l.id == listing_id) {
            return Err(BackendError::NotFound);
        }
        Ok(CheckoutSession {
            redirect_url: self.redirect_url.clone(),
            order_id: "ord-1".into(),
        })
    }

    fn confirm_success(&self, order_id: &str) -> Result<(), BackendError> {
        self.record(format!("success:{order_id}"));
        if self.fail_payments {
            return Err(unavailable());
        }
        Ok(())
    }

    fn confirm_cancel(&self, order_id: &str) -> Result<(), BackendError> {
        self.record(format!("cancel:{order_id}"));
        if self.fail_payments {
            return Err(unavailable());
        }
        Ok(())
    }

    fn fetch_receipt(&self, order_id: &str) -> Result<ReceiptDocument, BackendError> {
        self.record(format!("receipt:{order_id}"));
        if self.fail_payments {
            return Err(unavailable());
        }
        if order_id != "ord-1" {
            return Err(BackendError::NotFound);
        }
        Ok(ReceiptDocument {
            filename: ReceiptDocument::default_filename(order_id),
            bytes: b"%PDF-1.4 receipt".to_vec(),
        })
    }
}

impl SiteContentSource for FakeBackend {
    fn settings(&self) -> Result<SiteSettings, BackendError> {
        Ok(SiteSettings::default())
    }

    fn contact_info(&self) -> Result<ContactInformation, BackendError> {
        Ok(ContactInformation {
            email: "hello@plans.example".into(),
            ..ContactInformation::default()
        })
    }

    fn team(&self) -> Result<Vec<TeamMember>, BackendError> {
        Ok(Vec::new())
    }

    fn testimonials(&self) -> Result<Vec<Testimonial>, BackendError> {
        Err(unavailable())
    }

    fn services(&self) -> Result<Vec<Service>, BackendError> {
        if self.fail_services {
            return Err(unavailable());
        }
        Ok(vec![Service {
            id: 1,
            title: "Custom Home Design".into(),
            description: "Plans drawn from scratch around your site.".into(),
            badge: "Popular".into(),
            icon_name: "Pencil".into(),
            order: 0,
            is_active: true,
        }])
    }

    fn plan_modifications(&self) -> Result<Vec<PlanModification>, BackendError> {
        if self.fail_services {
            return Err(unavailable());
        }
        Ok(vec![PlanModification {
            id: 1,
            title: "Add a garage".into(),
            description: "Extend any plan with a single or double garage.".into(),
            order: 0,
        }])
    }
}

pub fn fake_app(fake: &FakeBackend) -> Storefront {
    Storefront {
        listings: Box::new(fake.clone()),
        inquiries: Box::new(fake.clone()),
        payments: Box::new(fake.clone()),
        content: Box::new(fake.clone()),
        page_size: 6,
    }
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn post_form(uri: &str, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
