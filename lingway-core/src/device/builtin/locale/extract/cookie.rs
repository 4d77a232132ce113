use crate::ctx::RequestCtx;
use crate::locale::{Locale, LocaleCatalog, LocaleToken};
use http::header::COOKIE;
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// Reads the locale cookie. Never rewrites the request.
pub(crate) fn extract(ctx: &RequestCtx, cookie: &str, catalog: &LocaleCatalog) -> Option<Locale> {
    let header = ctx.joined_header(COOKIE.as_str(), "; ")?;
    let cookies = parse_cookies(&header);

    let value = cookies.get(cookie)?;
    LocaleToken::parse(value.trim()).and_then(|token| catalog.normalize_token(token))
}

/// Parses a `Cookie` header into a name → value map.
///
/// Pairs are separated by `;` or `,`, both sides are trimmed and
/// percent-decoded, and the first occurrence of a name wins.
pub(crate) fn parse_cookies(header: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    for pair in header.split([';', ',']) {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };

        let name = decode(name.trim());
        if name.is_empty() {
            continue;
        }

        cookies.entry(name).or_insert_with(|| decode(value.trim()));
    }

    cookies
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
