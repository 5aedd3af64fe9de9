use crate::domain::Category;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{fake_app, get, listing, read_body, FakeBackend};

#[test]
fn details_page_shows_listing_and_purchase_form() -> Result<(), Box<dyn std::error::Error>> {
    let mut plan = listing("42", 2500.0);
    plan.title = "Coastal Retreat".into();
    plan.description = "Open-plan living facing the sea".into();
    let app = fake_app(&FakeBackend::with_listings(vec![plan]));

    let resp = handle(get("/listings/42"), &app)?;
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Coastal Retreat"));
    assert!(body.contains("Open-plan living facing the sea"));
    assert!(body.contains("action=\"/checkout\""));
    assert!(body.contains("name=\"listing_id\" value=\"42\""));
    Ok(())
}

#[test]
fn unknown_listing_renders_not_found_page() -> Result<(), Box<dyn std::error::Error>> {
    let app = fake_app(&FakeBackend::with_listings(vec![listing("1", 100.0)]));

    let resp = handle(get("/listings/999"), &app)?;
    assert_eq!(resp.status(), 404);
    assert!(read_body(resp).contains("House Plan Not Found"));
    Ok(())
}

#[test]
fn backend_outage_on_details_is_an_error() {
    let fake = FakeBackend {
        fail_listings: true,
        ..FakeBackend::default()
    };
    let app = fake_app(&fake);

    match handle(get("/listings/1"), &app) {
        Err(e @ ServerError::Backend(_)) => assert_eq!(e.status(), 502),
        other => panic!("expected backend error, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn built_home_breadcrumb_points_at_built_homes() -> Result<(), Box<dyn std::error::Error>> {
    let mut home = listing("7", 900000.0);
    home.category = Category::Built;
    let app = fake_app(&FakeBackend::with_listings(vec![home]));

    let body = read_body(handle(get("/listings/7"), &app)?);
    let crumb = body
        .split("class=\"breadcrumb\"")
        .nth(1)
        .and_then(|rest| rest.split("</p>").next())
        .unwrap_or("");
    assert!(crumb.contains("href=\"/built-homes\""));
    assert!(!crumb.contains("/house-plans"));
    Ok(())
}

#[test]
fn only_web_video_links_are_rendered() -> Result<(), Box<dyn std::error::Error>> {
    let mut safe = listing("1", 100.0);
    safe.video_url = Some("https://videos.example.com/tour".into());
    let mut unsafe_link = listing("2", 100.0);
    unsafe_link.video_url = Some("javascript:alert(1)".into());
    let app = fake_app(&FakeBackend::with_listings(vec![safe, unsafe_link]));

    let body = read_body(handle(get("/listings/1"), &app)?);
    assert!(body.contains("href=\"https://videos.example.com/tour\""));

    let body = read_body(handle(get("/listings/2"), &app)?);
    assert!(!body.contains("javascript:"));
    assert!(!body.contains("walkthrough video"));
    Ok(())
}
