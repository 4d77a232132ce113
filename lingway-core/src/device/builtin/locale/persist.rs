use crate::locale::Locale;
use http::header::{InvalidHeaderValue, SET_COOKIE};
use http::{HeaderMap, HeaderValue};

/// Appends `Set-Cookie: <name>=<locale>; path=/` to the response headers.
///
/// Existing `Set-Cookie` headers from the downstream handler are kept.
pub fn append_locale_cookie(
    headers: &mut HeaderMap,
    name: &str,
    locale: &Locale,
) -> Result<(), InvalidHeaderValue> {
    let value = HeaderValue::from_str(&format!("{name}={locale}; path=/"))?;
    headers.append(SET_COOKIE, value);
    Ok(())
}
