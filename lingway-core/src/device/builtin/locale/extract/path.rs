use crate::ctx::RequestCtx;
use crate::locale::{Locale, LocaleCatalog, LocaleToken};

/// Matches the first path segment as a whole against the locale pattern.
///
/// `/de/foo` and `/en-us` match, `/design` and `/de.html` do not. When
/// `rewrite` is set the segment and its leading `/` are removed, leaving an
/// empty path for `/de`.
pub(crate) fn extract(
    ctx: &mut RequestCtx,
    catalog: &LocaleCatalog,
    rewrite: bool,
) -> Option<Locale> {
    let rest = ctx.path().strip_prefix('/')?;

    let (segment, remainder) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };

    let locale = LocaleToken::parse(segment).and_then(|token| catalog.normalize_token(token))?;

    if rewrite {
        let remainder = remainder.to_string();
        ctx.set_path(remainder);
    }

    Some(locale)
}
