use crate::locale::{Locale, LocaleToken};
use pretty_assertions::assert_eq;

#[test]
fn parses_language_only() {
    let token = LocaleToken::parse("de").unwrap();

    assert_eq!(token.language, "de");
    assert_eq!(token.region, None);
}

#[test]
fn parses_language_and_region() {
    let token = LocaleToken::parse("en-us").unwrap();

    assert_eq!(token.language, "en");
    assert_eq!(token.region, Some("us"));
    assert_eq!(token.canonical(), "en-US");
}

#[test]
fn accepts_three_letter_subtags() {
    assert_eq!(LocaleToken::parse("DEU-che").unwrap().canonical(), "deu-CHE");
}

#[test]
fn rejects_malformed_tokens() {
    for raw in [
        "", "d", "deut", "de-", "-de", "en_US", "en-U", "en-USAX", "en-US-x", "d3", "de de",
    ] {
        assert!(LocaleToken::parse(raw).is_none(), "{raw:?} should not parse");
    }
}

#[test]
fn locale_parse_trims_and_canonicalizes() {
    assert_eq!(Locale::parse(" DE-de ").unwrap(), "de-DE");
    assert!(Locale::parse("english").is_none());
}
