mod canonical;
mod extract;
mod persist;
mod resolver;
#[cfg(test)]
mod tests;

pub use canonical::{RedirectDecision, canonicalize, inject_marker};
pub use persist::append_locale_cookie;
pub use resolver::{Resolution, resolve};

use crate::conf::types::LocaleDeviceConfig;
use crate::ctx::{RequestCtx, ResolvedLocale, ResponseCtx};
use crate::device::core::errors::DeviceError;
use crate::device::core::{Device, DeviceResult};
use http::HeaderValue;

/// Resolves the locale of each request from its URL, headers and cookies.
///
/// Per request:
/// 1. Excluded paths pass through untouched with the default locale
/// 2. The resolved locale is reset to the default
/// 3. Every configured source runs; the first match wins
/// 4. In redirect mode the request is canonicalized and, if the client's URL
///    differs, answered with a 301
/// 5. After the downstream handler, the locale is optionally saved in a cookie
#[derive(Debug)]
pub struct LocaleDevice {
    cfg: LocaleDeviceConfig,
}

impl LocaleDevice {
    pub fn from_config(cfg: LocaleDeviceConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &LocaleDeviceConfig {
        &self.cfg
    }
}

impl Device for LocaleDevice {
    fn on_request(&self, ctx: &mut RequestCtx) -> DeviceResult {
        let default_locale = self.cfg.catalog.default_locale().clone();

        if self.cfg.is_excluded(ctx.path()) {
            tracing::debug!(path = ctx.path(), "locale handling bypassed");
            ctx.extensions.insert(ResolvedLocale::bypassed(default_locale));
            return DeviceResult::Continue;
        }

        ctx.extensions.insert(ResolvedLocale::fallback(default_locale));
        ctx.trim_trailing_slash();

        let original_url = self.cfg.redirect.map(|_| ctx.url());
        let resolution = resolve(&self.cfg, ctx);
        ctx.extensions.insert(ResolvedLocale::from(&resolution));

        tracing::debug!(
            locale = %resolution.locale,
            source = resolution.source.map(|s| s.as_str()).unwrap_or("default"),
            "locale resolved"
        );

        let (Some(target), Some(original_url)) = (self.cfg.redirect, original_url) else {
            return DeviceResult::Continue;
        };

        match canonicalize(&self.cfg, target, ctx, &resolution.locale, &original_url) {
            RedirectDecision::Continue => DeviceResult::Continue,
            RedirectDecision::Redirect { location } => match HeaderValue::from_str(&location) {
                Ok(value) => {
                    tracing::info!(from = %original_url, to = %location, "locale redirect");
                    DeviceResult::Respond(ResponseCtx::moved_permanently(value))
                }
                Err(err) => DeviceResult::Error(DeviceError::degraded(format!(
                    "cannot redirect to '{location}': {err}"
                ))),
            },
        }
    }

    fn on_response(&self, req: &RequestCtx, resp: &mut ResponseCtx) -> DeviceResult {
        if !self.cfg.save_to_cookie {
            return DeviceResult::Continue;
        }

        let Some(resolved) = req.resolved_locale().filter(|r| !r.is_bypassed()) else {
            return DeviceResult::Continue;
        };

        match append_locale_cookie(&mut resp.headers, &self.cfg.cookie, resolved.locale()) {
            Ok(()) => DeviceResult::Continue,
            Err(err) => DeviceResult::Error(DeviceError::degraded(format!(
                "cannot write locale cookie '{}': {err}",
                self.cfg.cookie
            ))),
        }
    }
}
