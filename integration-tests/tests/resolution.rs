use integration_tests::harness::TestGateway;
use pretty_assertions::assert_eq;

/// Requests without any locale signal get the default locale
#[test]
fn default_locale_applies_without_signals() {
    // Arrange
    let gateway = TestGateway::from_fixture("default.hcl");

    // Act
    let res = gateway.get("http://example.com/some/path");

    // Assert
    assert_eq!(res.status, 200);
    assert_eq!(res.body, "Coolness");
    assert_eq!(res.locale(), Some("en"));
}

/// Every built-in source is consulted by default
#[test]
fn every_source_sets_locale() {
    let gateway = TestGateway::from_fixture("default.hcl");

    for (url, headers) in [
        ("http://example.com?locale=es", &[][..]),
        ("http://example.com/es/foo", &[][..]),
        ("http://es.example.com", &[][..]),
        ("http://example.com", &[("accept-language", "es")][..]),
        ("http://example.com", &[("cookie", "locale=es")][..]),
    ] {
        let res = gateway.request(url, headers);
        assert_eq!(res.locale(), Some("es"), "{url}");
    }
}

/// Param beats path beats host beats header beats cookie
#[test]
fn sources_override_in_priority_order() {
    let gateway = TestGateway::from_fixture("default.hcl");

    let res = gateway.request(
        "http://de.example.com/en-us?locale=es",
        &[("accept-language", "de"), ("cookie", "locale=de")],
    );
    assert_eq!(res.locale(), Some("es"));

    let res = gateway.request(
        "http://de.example.com/en-us",
        &[("accept-language", "de"), ("cookie", "locale=de")],
    );
    assert_eq!(res.locale(), Some("en-US"));

    let res = gateway.request("http://de.example.com", &[("accept-language", "es")]);
    assert_eq!(res.locale(), Some("de"));

    let res = gateway.request(
        "http://example.com",
        &[("accept-language", "es"), ("cookie", "locale=de")],
    );
    assert_eq!(res.locale(), Some("es"));
}

/// Accept-Language picks the best available range by quality
#[test]
fn accept_language_uses_quality() {
    let gateway = TestGateway::from_fixture("default.hcl");

    let res = gateway.request(
        "http://example.com",
        &[("accept-language", "fr;q=1, es;q=0.5, de;q=0.8")],
    );

    assert_eq!(res.locale(), Some("de"));
}

/// Only the configured sources are consulted, in their configured order
#[test]
fn custom_sources() {
    let gateway = TestGateway::from_fixture("custom_sources.hcl");

    let res = gateway.request("http://de.example.com", &[("accept-language", "es")]);
    assert_eq!(res.locale(), Some("es"));

    let res = gateway.request("http://de.example.com", &[("accept-language", "foo")]);
    assert_eq!(res.locale(), Some("de"));

    let res = gateway.get("http://de.example.com");
    assert_eq!(res.locale(), Some("de"));

    let res = gateway.get("http://example.com?locale=de");
    assert_eq!(res.locale(), Some("en"));

    let res = gateway.get("http://example.com/de");
    assert_eq!(res.locale(), Some("en"));
}

/// Without redirects the application sees the request as sent, minus a trailing slash
#[test]
fn request_is_not_rewritten_without_redirect() {
    let gateway = TestGateway::from_fixture("default.hcl");

    let res = gateway.get("http://de.example.com/de/some/path/?locale=es");

    assert_eq!(res.locale(), Some("es"));
    assert_eq!(
        res.seen_url(),
        Some("http://de.example.com/de/some/path?locale=es")
    );
}

/// A disabled device is never loaded
#[test]
fn disabled_device_is_skipped() {
    let gateway = TestGateway::from_fixture("disabled.hcl");

    let res = gateway.get("http://de.example.com");

    assert_eq!(res.status, 200);
    assert_eq!(res.locale(), None);
}
