use crate::conf::types::{LocaleDeviceConfig, RedirectTarget};
use crate::ctx::RequestCtx;
use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// The request is already canonical; hand it downstream.
    Continue,
    /// The client must be sent to `location`.
    Redirect { location: String },
}

/// Rewrites an already-stripped request into its canonical form and compares
/// it to `original_url`.
///
/// Preconditions: every configured extractor ran in rewrite mode, so the
/// request carries no locale marker of its own any more.
pub fn canonicalize(
    cfg: &LocaleDeviceConfig,
    target: RedirectTarget,
    ctx: &mut RequestCtx,
    locale: &Locale,
    original_url: &str,
) -> RedirectDecision {
    // The canonical form of a default-locale request carries no marker.
    let suppress = cfg.canonical && locale == cfg.catalog.default_locale();
    if !suppress {
        inject_marker(target, ctx, &cfg.param, locale);
    }

    if ctx.url() == original_url {
        return RedirectDecision::Continue;
    }

    // `http://example.com`, never `http://example.com/`.
    if ctx.path() == "/" {
        ctx.set_path("");
    }

    RedirectDecision::Redirect {
        location: ctx.url(),
    }
}

/// Writes exactly one locale marker into the redirect target.
pub fn inject_marker(target: RedirectTarget, ctx: &mut RequestCtx, param: &str, locale: &Locale) {
    match target {
        RedirectTarget::Param => {
            let pair = format!("{param}={locale}");
            let query = if ctx.query().is_empty() {
                pair
            } else {
                format!("{}&{pair}", ctx.query())
            };
            ctx.set_query(query);
        }
        RedirectTarget::Path => {
            let mut path = format!("/{locale}{}", ctx.path());
            if path.ends_with('/') {
                path.pop();
            }
            ctx.set_path(path);
        }
        RedirectTarget::Host => {
            ctx.ensure_host();
            let host = format!("{locale}.{}", ctx.host().unwrap_or_default());
            if let Err(err) = ctx.set_host(&host) {
                tracing::debug!(%host, error = %err, "cannot prefix host label");
                return;
            }
            let server_name = format!("{locale}.{}", ctx.server_name());
            ctx.set_server_name(server_name);
        }
    }
}
