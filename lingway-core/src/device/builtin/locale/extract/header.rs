use crate::ctx::RequestCtx;
use crate::locale::{Locale, LocaleCatalog, LocaleToken};
use http::header::ACCEPT_LANGUAGE;
use std::fmt::{Display, Formatter};

/// One `Accept-Language` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LanguageRange<'a> {
    pub token: LocaleToken<'a>,
    pub quality: Quality<'a>,
}

/// An exact `q` value, ordered without rounding.
///
/// `fraction` holds the digits after `0.` with trailing zeros removed, so
/// comparing it as a string compares the values. `0` and `0.0` have an empty
/// fraction and sort below every other quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Quality<'a> {
    one: bool,
    fraction: &'a str,
}

impl Quality<'static> {
    pub const ONE: Self = Quality {
        one: true,
        fraction: "",
    };
}

impl Display for Quality<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.one, self.fraction) {
            (true, _) => f.write_str("1"),
            (false, "") => f.write_str("0"),
            (false, fraction) => write!(f, "0.{fraction}"),
        }
    }
}

/// Content negotiation over `Accept-Language`. Never rewrites the request.
pub(crate) fn extract(ctx: &RequestCtx, catalog: &LocaleCatalog) -> Option<Locale> {
    let accept = ctx.joined_header(ACCEPT_LANGUAGE.as_str(), ",")?;

    parse_accept_language(&accept)
        .into_iter()
        .find_map(|range| catalog.normalize_token(range.token))
}

/// Parses `Accept-Language` into ranges ordered by descending quality.
///
/// Equal qualities keep their header order. Entries that are not locale tokens
/// (`*`, `zh-Hant-TW`) or that carry a malformed `q` are dropped. `q=0`
/// entries are kept and rank last.
pub(crate) fn parse_accept_language(value: &str) -> Vec<LanguageRange<'_>> {
    let mut ranges: Vec<LanguageRange<'_>> = value
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let token = LocaleToken::parse(parts.next()?.trim())?;

            let mut quality = Quality::ONE;
            for param in parts {
                let Some((name, value)) = param.split_once('=') else {
                    continue;
                };
                if name.trim().eq_ignore_ascii_case("q") {
                    quality = parse_quality(value.trim())?;
                }
            }

            Some(LanguageRange { token, quality })
        })
        .collect();

    // Stable: ties keep header order.
    ranges.sort_by(|a, b| b.quality.cmp(&a.quality));
    ranges
}

/// `1`, `1.` followed by zeros, `0`, or `0.` followed by digits.
fn parse_quality(raw: &str) -> Option<Quality<'_>> {
    let (int, frac) = match raw.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (raw, None),
    };

    match (int, frac) {
        ("1", None) => Some(Quality::ONE),
        ("1", Some(frac)) if frac.bytes().all(|b| b == b'0') => Some(Quality::ONE),
        ("0", None) => Some(Quality {
            one: false,
            fraction: "",
        }),
        ("0", Some(frac)) if !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()) => {
            Some(Quality {
                one: false,
                fraction: frac.trim_end_matches('0'),
            })
        }
        _ => None,
    }
}
