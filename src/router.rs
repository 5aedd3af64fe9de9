use crate::app::Storefront;
use crate::backend::{BackendError, ListingScope};
use crate::catalog::{query, CatalogState, PageRequest, SortKey};
use crate::domain::inquiry::normalize_email;
use crate::domain::{is_web_url, parse_order_id, ContactForm, QuoteForm};
use crate::errors::{ResultResp, ServerError};
use crate::forms::FormData;
use crate::responses::{html_response, html_with_status, pdf_attachment, see_other};
use crate::templates::pages::{self, CatalogVm, ContactVm, HomeVm, QuoteVm, ServicesVm};
use crate::templates::{Nav, NoticeKind};
use astra::Request;
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{info, warn};

struct CatalogPage {
    title: &'static str,
    intro: &'static str,
    path: &'static str,
    nav: Nav,
    scope: ListingScope,
}

const HOUSE_PLANS: CatalogPage = CatalogPage {
    title: "House Plans",
    intro: "Ready-to-build plans you can buy and download today.",
    path: "/house-plans",
    nav: Nav::Plans,
    scope: ListingScope::Plans,
};

const BUILT_HOMES: CatalogPage = CatalogPage {
    title: "Built Homes",
    intro: "Homes we've designed and built, with plans available to buy.",
    path: "/built-homes",
    nav: Nav::Built,
    scope: ListingScope::Built,
};

const SEARCH: CatalogPage = CatalogPage {
    title: "Search",
    intro: "Plans and built homes matching your search.",
    path: "/search",
    nav: Nav::None,
    scope: ListingScope::All,
};

pub fn handle(req: Request, app: &Storefront) -> ResultResp {
    let start = Instant::now();
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let result = route(req, app);

    let status = match &result {
        Ok(resp) => resp.status().as_u16(),
        Err(e) => e.status(),
    };
    info!(%method, %path, status, elapsed = ?start.elapsed(), "request");

    result
}

fn route(mut req: Request, app: &Storefront) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().trim_end_matches('/').to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => home(app),
        ("GET", ["house-plans"]) => catalog(&req, app, &HOUSE_PLANS),
        ("GET", ["built-homes"]) => catalog(&req, app, &BUILT_HOMES),
        ("GET", ["search"]) => catalog(&req, app, &SEARCH),
        ("GET", ["listings", id]) => listing_details(app, id),
        ("GET", ["services"]) => services(app),

        ("POST", ["checkout"]) => checkout(&mut req, app),
        ("GET", ["payment-success"]) => payment_return(&req, app, PaymentOutcome::Success),
        ("GET", ["payment-cancel"]) => payment_return(&req, app, PaymentOutcome::Cancel),
        ("GET", ["orders", id, "receipt"]) => receipt(app, id),

        ("GET", ["contact"]) => contact_form(app),
        ("POST", ["contact"]) => submit_contact(&mut req, app),
        ("GET", ["quote"]) => quote_form(),
        ("POST", ["quote"]) => submit_quote(&mut req, app),

        (
            _,
            []
            | ["house-plans" | "built-homes" | "search" | "services" | "checkout" | "contact" | "quote"]
            | ["payment-success" | "payment-cancel"]
            | ["listings", _]
            | ["orders", _, "receipt"],
        ) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

fn home(app: &Storefront) -> ResultResp {
    let fetched = app.listings.list(ListingScope::All);
    if let Err(e) = &fetched {
        warn!(error = %e, "home page listings unavailable");
    }
    let listings = fetched.as_deref().unwrap_or_default();

    let popular = query(
        listings,
        &Default::default(),
        "",
        SortKey::Popular,
        PageRequest::new(1, app.page_size),
    );

    let vm = HomeVm {
        settings: app.settings_or_default(),
        popular: popular.items,
        testimonials: app.testimonials_or_empty(),
        team: app.team_or_empty(),
        listings_failed: fetched.is_err(),
    };

    html_response(pages::home_page(&vm))
}

fn catalog(req: &Request, app: &Storefront, page: &CatalogPage) -> ResultResp {
    let state = CatalogState::from_query(req.uri().query().unwrap_or(""));

    let listings = match app.listings.list(page.scope) {
        Ok(l) => l,
        Err(e) => {
            warn!(error = %e, scope = ?page.scope, "catalog listings unavailable");
            let vm = CatalogVm {
                title: page.title,
                intro: page.intro,
                path: page.path,
                nav: page.nav,
                state: &state,
                result: None,
                styles: Vec::new(),
            };
            return html_with_status(502, pages::catalog_page(&vm));
        }
    };

    let styles: Vec<String> = listings
        .iter()
        .flat_map(|l| l.styles.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let result = query(
        &listings,
        &state.criteria,
        &state.search,
        state.sort,
        PageRequest::new(state.page, app.page_size),
    );

    let vm = CatalogVm {
        title: page.title,
        intro: page.intro,
        path: page.path,
        nav: page.nav,
        state: &state,
        result: Some(result),
        styles,
    };

    html_response(pages::catalog_page(&vm))
}

fn listing_details(app: &Storefront, id: &str) -> ResultResp {
    match app.listings.get(id)? {
        Some(listing) => html_response(pages::details_page(&listing)),
        None => html_with_status(404, pages::listing_not_found_page()),
    }
}

fn services(app: &Storefront) -> ResultResp {
    let services = app.content.services();
    let modifications = app.content.plan_modifications();

    if let Err(e) = &services {
        warn!(error = %e, "services unavailable");
    }
    if let Err(e) = &modifications {
        warn!(error = %e, "plan modifications unavailable");
    }

    let vm = ServicesVm {
        services_failed: services.is_err(),
        services: services.unwrap_or_default(),
        modifications: modifications.unwrap_or_default(),
    };
    html_response(pages::services_page(&vm))
}

fn checkout(req: &mut Request, app: &Storefront) -> ResultResp {
    let form = FormData::from_body(req)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;

    let listing_id = form
        .get("listing_id")
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing listing".into()))?;

    let raw_email = form.get("email").map(str::trim).unwrap_or_default();
    let email = if raw_email.is_empty() {
        None
    } else {
        match normalize_email(raw_email) {
            Some(e) => Some(e),
            None => {
                return html_with_status(
                    400,
                    pages::checkout_failed_page("Please enter a valid email address.", Some(listing_id)),
                )
            }
        }
    };

    let session = match app.payments.create_checkout(listing_id, email.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, %listing_id, "checkout session failed");
            let status = if matches!(e, BackendError::NotFound) { 404 } else { 502 };
            return html_with_status(
                status,
                pages::checkout_failed_page(e.user_notice(), Some(listing_id)),
            );
        }
    };

    // Only hand the browser off to a real web address.
    if !is_web_url(&session.redirect_url) {
        warn!(order_id = %session.order_id, url = %session.redirect_url, "unusable payment redirect");
        return html_with_status(
            502,
            pages::checkout_failed_page(
                "Something went wrong on our side. Please try again in a moment.",
                Some(listing_id),
            ),
        );
    }

    info!(order_id = %session.order_id, %listing_id, "redirecting to payment");
    see_other(&session.redirect_url)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaymentOutcome {
    Success,
    Cancel,
}

/// Redirect-return pages confirm the outcome once and always render.
fn payment_return(req: &Request, app: &Storefront, outcome: PaymentOutcome) -> ResultResp {
    let query = FormData::from_query(req);
    let order_id = query.get("order_id").and_then(parse_order_id);

    match order_id.as_deref() {
        Some(id) => {
            let confirmed = match outcome {
                PaymentOutcome::Success => app.payments.confirm_success(id),
                PaymentOutcome::Cancel => app.payments.confirm_cancel(id),
            };
            match confirmed {
                Ok(()) => info!(order_id = %id, ?outcome, "payment outcome confirmed"),
                Err(e) => warn!(order_id = %id, ?outcome, error = %e, "payment confirmation failed"),
            }
        }
        None => warn!(?outcome, "payment return without a usable order id"),
    }

    let page = match outcome {
        PaymentOutcome::Success => pages::payment_success_page(order_id.as_deref()),
        PaymentOutcome::Cancel => pages::payment_cancel_page(order_id.as_deref()),
    };
    html_response(page)
}

fn receipt(app: &Storefront, raw_id: &str) -> ResultResp {
    let order_id = parse_order_id(raw_id).ok_or(ServerError::NotFound)?;
    let doc = app.payments.fetch_receipt(&order_id)?;
    pdf_attachment(doc)
}

fn contact_form(app: &Storefront) -> ResultResp {
    let info = app.contact_info_or_default();
    let form = ContactForm::default();
    html_response(pages::contact_page(&ContactVm {
        form: &form,
        errors: None,
        notice: None,
        info: &info,
    }))
}

fn submit_contact(req: &mut Request, app: &Storefront) -> ResultResp {
    let raw = FormData::from_body(req)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;
    let form = ContactForm::from_form(&raw);
    let info = app.contact_info_or_default();

    let message = match form.validate() {
        Ok(m) => m,
        Err(errors) => {
            return html_with_status(
                400,
                pages::contact_page(&ContactVm {
                    form: &form,
                    errors: Some(&errors),
                    notice: Some((NoticeKind::Failure, "Please fix the highlighted fields.")),
                    info: &info,
                }),
            )
        }
    };

    if let Err(e) = app.inquiries.submit_contact(&message) {
        warn!(error = %e, "contact submission failed");
        return html_with_status(
            502,
            pages::contact_page(&ContactVm {
                form: &form,
                errors: None,
                notice: Some((NoticeKind::Failure, "Submission failed, please try again.")),
                info: &info,
            }),
        );
    }

    info!(subject = %message.subject, "contact message sent");
    let cleared = ContactForm::default();
    html_response(pages::contact_page(&ContactVm {
        form: &cleared,
        errors: None,
        notice: Some((
            NoticeKind::Success,
            "Thanks for reaching out! We'll get back to you soon.",
        )),
        info: &info,
    }))
}

fn quote_form() -> ResultResp {
    let form = QuoteForm::default();
    html_response(pages::quote_page(&QuoteVm {
        form: &form,
        errors: None,
        notice: None,
    }))
}

fn submit_quote(req: &mut Request, app: &Storefront) -> ResultResp {
    let raw = FormData::from_body(req)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;
    let form = QuoteForm::from_form(&raw);

    let request = match form.validate() {
        Ok(r) => r,
        Err(errors) => {
            return html_with_status(
                400,
                pages::quote_page(&QuoteVm {
                    form: &form,
                    errors: Some(&errors),
                    notice: Some((NoticeKind::Failure, "Please fix the highlighted fields.")),
                }),
            )
        }
    };

    if let Err(e) = app.inquiries.submit_quote(&request) {
        warn!(error = %e, "quote submission failed");
        return html_with_status(
            502,
            pages::quote_page(&QuoteVm {
                form: &form,
                errors: None,
                notice: Some((
                    NoticeKind::Failure,
                    "Failed to submit quote request. Please try again.",
                )),
            }),
        );
    }

    info!(city = %request.city, "quote request sent");
    let cleared = QuoteForm::default();
    html_response(pages::quote_page(&QuoteVm {
        form: &cleared,
        errors: None,
        notice: Some((
            NoticeKind::Success,
            "Thank you! We've received your quote request and will be in touch.",
        )),
    }))
}
