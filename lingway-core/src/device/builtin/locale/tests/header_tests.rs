use crate::conf::types::Source;
use crate::device::builtin::locale::extract::{extract, parse_accept_language};
use crate::device::builtin::locale::tests::test_helpers::{config, locale, request};
use pretty_assertions::assert_eq;

fn ranked(header: &str) -> Vec<(String, String)> {
    parse_accept_language(header)
        .into_iter()
        .map(|r| (r.token.canonical(), r.quality.to_string()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(tag, q)| (tag.to_string(), q.to_string()))
        .collect()
}

#[test]
fn quality_defaults_to_one() {
    assert_eq!(
        ranked("de-de,de,en;q=0.5"),
        pairs(&[("de-DE", "1"), ("de", "1"), ("en", "0.5")])
    );
}

#[test]
fn ranges_sort_by_descending_quality() {
    assert_eq!(
        ranked("de;q=0.5,en-US;q=0.8,es;q=0.7"),
        pairs(&[("en-US", "0.8"), ("es", "0.7"), ("de", "0.5")])
    );
}

#[test]
fn equal_qualities_keep_header_order() {
    assert_eq!(
        ranked("es;q=0.3, de ;q=0.9, en; q = 0.90"),
        pairs(&[("de", "0.9"), ("en", "0.9"), ("es", "0.3")])
    );
}

#[test]
fn quality_keeps_every_digit() {
    // Arrange / Act
    let ranges = ranked("de;q=0.1231,es;q=0.1239,fr;q=0.45,it;q=0.5");

    // Assert
    assert_eq!(
        ranges,
        pairs(&[("it", "0.5"), ("fr", "0.45"), ("es", "0.1239"), ("de", "0.1231")])
    );
}

#[test]
fn zero_quality_ranks_last() {
    assert_eq!(
        ranked("it;q=0, fr, nl;q=0.0001, de;q=0.000"),
        pairs(&[("fr", "1"), ("nl", "0.0001"), ("it", "0"), ("de", "0")])
    );
}

#[test]
fn malformed_entries_are_dropped() {
    assert_eq!(
        ranked("*, zh-Hant-TW, de;q=2, es;q=0.x, fr;q=, it;q=0., pt;q=1.000"),
        pairs(&[("pt", "1")])
    );
}

#[test]
fn header_picks_best_available_locale() {
    let cfg = config(|_| {});

    for (header, expected) in [
        ("de-de,de,en;q=0.5", "de-DE"),
        ("en;q=0.5,en-US;q=0.8,es;q=0.7", "en-US"),
        ("de;q=0.5,en-US;q=0.8,es;q=0.7", "en-US"),
        ("fr,ja;q=0.9,es;q=0.1", "es"),
        ("de, de-de,en;q=0.5", "de"),
        ("de;q=0.1231,es;q=0.1239", "es"),
        ("fr,de;q=0.0001", "de"),
        ("fr,de;q=0.0", "de"),
    ] {
        let mut ctx = request("http://example.com/", &[("accept-language", header)]);
        assert_eq!(
            extract(Source::Header, &mut ctx, &cfg, true),
            Some(locale(expected)),
            "{header}"
        );
    }
}

#[test]
fn header_without_available_locale_is_no_match() {
    let cfg = config(|_| {});

    let mut ctx = request("http://example.com/", &[("accept-language", "fr, foo")]);
    assert_eq!(extract(Source::Header, &mut ctx, &cfg, true), None);

    let mut ctx = request("http://example.com/", &[]);
    assert_eq!(extract(Source::Header, &mut ctx, &cfg, true), None);
}

#[test]
fn header_never_rewrites_the_request() {
    let cfg = config(|_| {});
    let mut ctx = request("http://example.com/de?locale=es", &[("accept-language", "de")]);

    extract(Source::Header, &mut ctx, &cfg, true);

    assert_eq!(ctx.url(), "http://example.com/de?locale=es");
}
