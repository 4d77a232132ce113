use crate::ctx::RequestCtx;
use crate::locale::{Locale, LocaleCatalog, LocaleToken};

/// Looks for `<param>=<token>` among the `&`-separated query pairs.
///
/// The key must equal `param` exactly and the whole value must be a locale
/// token, so `xlocale=de` and `locale=de-` never match. The first candidate in
/// the catalog wins. When `rewrite` is set every candidate pair is dropped from
/// the query.
pub(crate) fn extract(
    ctx: &mut RequestCtx,
    param: &str,
    catalog: &LocaleCatalog,
    rewrite: bool,
) -> Option<Locale> {
    let query = ctx.query();
    if query.is_empty() {
        return None;
    }

    let mut locale = None;
    let mut kept = Vec::new();
    let mut stripped = false;

    for pair in query.split('&') {
        let token = pair
            .split_once('=')
            .filter(|(key, _)| *key == param)
            .and_then(|(_, value)| LocaleToken::parse(value));

        match token {
            Some(token) => {
                stripped = true;
                if locale.is_none() {
                    locale = catalog.normalize_token(token);
                }
            }
            None => kept.push(pair),
        }
    }

    let rewritten = (rewrite && stripped && locale.is_some()).then(|| kept.join("&"));
    if let Some(query) = rewritten {
        ctx.set_query(query);
    }

    locale
}
