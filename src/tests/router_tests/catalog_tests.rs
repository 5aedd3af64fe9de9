use crate::domain::{Category, ListingRecord};
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{fake_app, get, listing, post_form, read_body, FakeBackend};
use astra::{Body, Request};
use http::Method;

fn card_count(body: &str) -> usize {
    body.matches("href=\"/listings/").count()
}

fn plans(n: usize) -> Vec<ListingRecord> {
    (1..=n)
        .map(|i| listing(&format!("p{i}"), 1000.0 * i as f64))
        .collect()
}

#[test]
fn house_plans_shows_first_page_of_plans() -> Result<(), Box<dyn std::error::Error>> {
    let mut listings = plans(8);
    let mut built = listing("b1", 500.0);
    built.category = Category::Built;
    listings.push(built);

    let app = fake_app(&FakeBackend::with_listings(listings));
    let resp = handle(get("/house-plans"), &app)?;

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("<strong>8</strong> results"));
    assert_eq!(card_count(&body), 6);
    assert!(!body.contains("/listings/b1"));
    assert!(body.contains("rel=\"next\""));
    Ok(())
}

#[test]
fn second_page_holds_the_remainder() -> Result<(), Box<dyn std::error::Error>> {
    let app = fake_app(&FakeBackend::with_listings(plans(8)));
    let resp = handle(get("/house-plans?sort=price-low&page=2"), &app)?;

    let body = read_body(resp);
    assert_eq!(card_count(&body), 2);
    assert!(body.contains("/listings/p7"));
    assert!(body.contains("/listings/p8"));
    assert!(body.contains("rel=\"prev\""));
    Ok(())
}

#[test]
fn page_past_the_end_renders_empty_page() -> Result<(), Box<dyn std::error::Error>> {
    let app = fake_app(&FakeBackend::with_listings(plans(3)));
    let resp = handle(get("/house-plans?page=9"), &app)?;

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert_eq!(card_count(&body), 0);
    assert!(body.contains("<strong>3</strong> results"));
    assert!(body.contains("Back to the first page"));
    Ok(())
}

#[test]
fn thresholds_are_at_least() -> Result<(), Box<dyn std::error::Error>> {
    let mut three = listing("three", 1000.0);
    three.bedrooms = 3;
    let mut one = listing("one", 1000.0);
    one.bedrooms = 1;

    let app = fake_app(&FakeBackend::with_listings(vec![three, one]));
    let body = read_body(handle(get("/house-plans?bedrooms=2"), &app)?);

    assert!(body.contains("/listings/three"));
    assert!(!body.contains("/listings/one"));
    Ok(())
}

#[test]
fn built_homes_only_lists_built() -> Result<(), Box<dyn std::error::Error>> {
    let mut built = listing("b1", 500.0);
    built.category = Category::Built;
    let app = fake_app(&FakeBackend::with_listings(vec![listing("p1", 100.0), built]));

    let body = read_body(handle(get("/built-homes"), &app)?);
    assert!(body.contains("/listings/b1"));
    assert!(!body.contains("/listings/p1"));
    Ok(())
}

#[test]
fn search_matches_title_across_categories() -> Result<(), Box<dyn std::error::Error>> {
    let mut farm = listing("farm", 100.0);
    farm.title = "Karoo Farmhouse".into();
    farm.category = Category::Built;
    let app = fake_app(&FakeBackend::with_listings(vec![farm, listing("p1", 100.0)]));

    let body = read_body(handle(get("/search?q=farmhouse"), &app)?);
    assert!(body.contains("/listings/farm"));
    assert!(!body.contains("/listings/p1"));
    Ok(())
}

#[test]
fn garbage_query_values_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let app = fake_app(&FakeBackend::with_listings(plans(2)));
    let resp = handle(get("/house-plans?bedrooms=lots&price_min=&sort=bogus"), &app)?;

    assert_eq!(resp.status(), 200);
    assert_eq!(card_count(&read_body(resp)), 2);
    Ok(())
}

#[test]
fn backend_outage_renders_notice() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeBackend {
        fail_listings: true,
        ..FakeBackend::default()
    };
    let app = fake_app(&fake);
    let resp = handle(get("/house-plans"), &app)?;

    assert_eq!(resp.status(), 502);
    assert!(read_body(resp).contains("load listings right now"));
    Ok(())
}

#[test]
fn home_lists_popular_first_and_survives_missing_content() -> Result<(), Box<dyn std::error::Error>>
{
    let mut popular = listing("star", 100.0);
    popular.is_popular = true;
    let mut listings = plans(7);
    listings.push(popular);

    // The fake fails testimonials; the page must still render.
    let app = fake_app(&FakeBackend::with_listings(listings));
    let resp = handle(get("/"), &app)?;

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert_eq!(card_count(&body), 6);
    assert!(body.contains("/listings/star"));
    Ok(())
}

#[test]
fn unknown_path_is_not_found() {
    let app = fake_app(&FakeBackend::default());
    let result = handle(get("/no-such-page"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn wrong_method_is_rejected() {
    let app = fake_app(&FakeBackend::default());
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::DELETE;
    *req.uri_mut() = "/house-plans".parse().unwrap();

    let result = handle(req, &app);
    assert!(matches!(result, Err(ServerError::MethodNotAllowed)));
}

#[test]
fn wrong_method_on_parameterised_routes_is_rejected() {
    let fake = FakeBackend::with_listings(vec![listing("1", 100.0)]);
    let app = fake_app(&fake);

    for uri in [
        "/listings/1",
        "/payment-success?order_id=ord-1",
        "/payment-cancel?order_id=ord-1",
        "/orders/ord-1/receipt",
        "/services",
    ] {
        let result = handle(post_form(uri, ""), &app);
        assert!(
            matches!(result, Err(ServerError::MethodNotAllowed)),
            "POST {uri} should be 405"
        );
    }
    assert!(fake.calls().is_empty());
}

#[test]
fn zero_price_and_area_limits_show_everything() -> Result<(), Box<dyn std::error::Error>> {
    let app = fake_app(&FakeBackend::with_listings(plans(2)));
    let resp = handle(get("/house-plans?price_max=0&area_max=0"), &app)?;

    assert_eq!(card_count(&read_body(resp)), 2);
    Ok(())
}

#[test]
fn services_page_lists_services_and_modifications() -> Result<(), Box<dyn std::error::Error>> {
    let app = fake_app(&FakeBackend::default());
    let resp = handle(get("/services"), &app)?;

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("Custom Home Design"));
    assert!(body.contains("Add a garage"));
    assert!(body.contains("Our Design Process"));
    Ok(())
}

#[test]
fn services_page_survives_backend_outage() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeBackend {
        fail_services: true,
        ..FakeBackend::default()
    };
    let app = fake_app(&fake);
    let resp = handle(get("/services"), &app)?;

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("load our services right now"));
    assert!(body.contains("Our Design Process"));
    assert!(!body.contains("Professional Plan Modifications"));
    Ok(())
}
