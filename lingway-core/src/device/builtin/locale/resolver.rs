use crate::conf::types::{LocaleDeviceConfig, Source};
use crate::ctx::{RequestCtx, ResolvedLocale};
use crate::device::builtin::locale::extract;
use crate::locale::Locale;

/// Outcome of running every configured source against a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub locale: Locale,
    /// `None` when no source matched and the default locale applies.
    pub source: Option<Source>,
}

impl From<&Resolution> for ResolvedLocale {
    fn from(resolution: &Resolution) -> Self {
        match resolution.source {
            Some(source) => ResolvedLocale::matched(resolution.locale.clone(), source),
            None => ResolvedLocale::fallback(resolution.locale.clone()),
        }
    }
}

/// Evaluate all, adopt first.
///
/// Every configured extractor runs in priority order even after a winner is
/// known, so that in redirect mode each of them strips its own token from the
/// request. Only the first match decides the locale.
pub fn resolve(cfg: &LocaleDeviceConfig, ctx: &mut RequestCtx) -> Resolution {
    let rewrite = cfg.rewrites();
    let mut winner: Option<Resolution> = None;

    for &source in &cfg.sources {
        let Some(locale) = extract::extract(source, ctx, cfg, rewrite) else {
            continue;
        };

        match &winner {
            None => {
                tracing::trace!(%source, %locale, "locale source matched");
                winner = Some(Resolution {
                    locale,
                    source: Some(source),
                });
            }
            Some(adopted) => {
                tracing::trace!(%source, %locale, winner = %adopted.locale, "locale source overridden");
            }
        }
    }

    winner.unwrap_or_else(|| Resolution {
        locale: cfg.catalog.default_locale().clone(),
        source: None,
    })
}
