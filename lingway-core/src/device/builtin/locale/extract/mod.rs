mod cookie;
mod header;
mod host;
mod param;
mod path;

pub(crate) use cookie::parse_cookies;
pub(crate) use header::parse_accept_language;

use crate::conf::types::{LocaleDeviceConfig, Source};
use crate::ctx::RequestCtx;
use crate::locale::Locale;

/// Static dispatch from a [`Source`] to its extractor.
///
/// Addressable sources (param, path, host) strip their token when `rewrite` is
/// set; header and cookie never touch the request.
pub(crate) fn extract(
    source: Source,
    ctx: &mut RequestCtx,
    cfg: &LocaleDeviceConfig,
    rewrite: bool,
) -> Option<Locale> {
    match source {
        Source::Param => param::extract(ctx, &cfg.param, &cfg.catalog, rewrite),
        Source::Path => path::extract(ctx, &cfg.catalog, rewrite),
        Source::Host => host::extract(ctx, &cfg.catalog, rewrite),
        Source::Header => header::extract(ctx, &cfg.catalog),
        Source::Cookie => cookie::extract(ctx, &cfg.cookie, &cfg.catalog),
    }
}
