use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{fake_app, get, post_form, read_body, FakeBackend};

const CONTACT: &str = "name=Sipho+Dlamini&email=Sipho%40Example.com&phone=&subject=Plans&message=Do+you+ship+prints%3F";

const QUOTE: &str = "full_name=Thandi+Nkosi&email=thandi%40example.com&phone=0825550101\
&city=Durban&preferred_style=Modern&custom_style=&bedrooms=3&bathrooms=2\
&other_rooms=study&yard_length=30&yard_breadth=20&budget=R5%2C000+-+R5%2C500\
&description=Single+storey";

#[test]
fn contact_form_renders() -> Result<(), Box<dyn std::error::Error>> {
    let app = fake_app(&FakeBackend::default());
    let resp = handle(get("/contact"), &app)?;

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("action=\"/contact\""));
    assert!(body.contains("hello@plans.example"));
    Ok(())
}

#[test]
fn valid_contact_is_submitted_once() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeBackend::default();
    let app = fake_app(&fake);

    let resp = handle(post_form("/contact", CONTACT), &app)?;
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("notice-success"));
    assert_eq!(fake.calls(), vec!["contact:sipho@example.com".to_string()]);
    Ok(())
}

#[test]
fn invalid_contact_is_not_submitted() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeBackend::default();
    let app = fake_app(&fake);

    let resp = handle(
        post_form("/contact", "name=&email=not-an-email&subject=Hi&message=Hello"),
        &app,
    )?;
    assert_eq!(resp.status(), 400);

    let body = read_body(resp);
    assert!(body.contains("This field is required"));
    assert!(body.contains("Enter a valid email address"));
    assert!(fake.calls().is_empty());
    Ok(())
}

#[test]
fn failed_contact_keeps_what_was_typed() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeBackend {
        fail_submissions: true,
        ..FakeBackend::default()
    };
    let app = fake_app(&fake);

    let resp = handle(post_form("/contact", CONTACT), &app)?;
    assert_eq!(resp.status(), 502);

    let body = read_body(resp);
    assert!(body.contains("notice-failure"));
    assert!(body.contains("Sipho Dlamini"));
    Ok(())
}

#[test]
fn valid_quote_is_submitted() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeBackend::default();
    let app = fake_app(&fake);

    let resp = handle(post_form("/quote", QUOTE), &app)?;
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("received your quote request"));
    assert!(!body.contains("Thandi Nkosi"));
    assert_eq!(fake.calls(), vec!["quote:thandi@example.com".to_string()]);
    Ok(())
}

#[test]
fn quote_needs_custom_style_when_other() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeBackend::default();
    let app = fake_app(&fake);

    let body = QUOTE.replace("preferred_style=Modern", "preferred_style=Other");
    let resp = handle(post_form("/quote", &body), &app)?;

    assert_eq!(resp.status(), 400);
    assert!(fake.calls().is_empty());
    Ok(())
}

#[test]
fn failed_quote_reports_failure() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeBackend {
        fail_submissions: true,
        ..FakeBackend::default()
    };
    let app = fake_app(&fake);

    let resp = handle(post_form("/quote", QUOTE), &app)?;
    assert_eq!(resp.status(), 502);
    assert!(read_body(resp).contains("Failed to submit quote request"));
    Ok(())
}

#[test]
fn oversized_quote_is_rejected_not_truncated() {
    let fake = FakeBackend::default();
    let app = fake_app(&fake);

    let body = format!("{QUOTE}{}", "+".repeat(70 * 1024));
    let result = handle(post_form("/quote", &body), &app);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert!(fake.calls().is_empty());
}
