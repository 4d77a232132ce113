use integration_tests::harness::{TestGateway, captured_events};
use pretty_assertions::assert_eq;
use tracing::Level;

/// Redirects are logged at info with their origin and destination
#[test]
fn redirect_is_logged() {
    // Arrange
    let events = captured_events();
    let gateway = TestGateway::from_fixture("redirect_path.hcl");

    // Act
    let res = gateway.get("http://es.logging.example.com/docs");

    // Assert
    assert_eq!(res.status, 301);

    let events = events.lock().unwrap();
    let redirect = events
        .iter()
        .find(|e| {
            e.message() == Some("locale redirect")
                && e.field("from") == Some("http://es.logging.example.com/docs")
        })
        .expect("expected a redirect event");

    assert_eq!(redirect.level, Level::INFO);
    assert_eq!(redirect.field("to"), Some("http://logging.example.com/es/docs"));
}

/// Resolution is logged at debug with the winning source
#[test]
fn resolution_is_logged() {
    let events = captured_events();
    let gateway = TestGateway::from_fixture("default.hcl");

    gateway.request("http://example.com", &[("accept-language", "de")]);

    let events = events.lock().unwrap();
    assert!(
        events.iter().any(|e| e.message() == Some("locale resolved")
            && e.field("locale") == Some("de")
            && e.field("source") == Some("header")),
        "expected a resolution event, got {events:?}"
    );
}
