use crate::conf::types::{LocaleDeviceConfig, LocaleDeviceSpec, RedirectTarget, Source};
use crate::conf::validation::{ConfigError, ValidationCtx};
use crate::locale::{CatalogError, Locale, LocaleCatalog};
use regex::Regex;
use smallvec::SmallVec;

/// Validates a locale device spec, collecting every problem into `ctx`.
///
/// Returns the runtime config only when every setting is valid.
pub fn validate_locale_device(
    spec: &LocaleDeviceSpec,
    ctx: &mut ValidationCtx,
) -> Option<LocaleDeviceConfig> {
    let before = ctx.len();

    if !is_param_name(&spec.param) {
        ctx.push(ConfigError::InvalidParamName {
            param: spec.param.clone(),
        });
    }

    if !is_cookie_name(&spec.cookie) {
        ctx.push(ConfigError::InvalidCookieName {
            cookie: spec.cookie.clone(),
        });
    }

    let sources = validate_sources(&spec.source, ctx);
    let redirect = validate_redirect(spec.redirect.as_deref(), ctx);
    let except = validate_except(spec.except.as_deref(), ctx);
    let catalog = validate_catalog(&spec.available_locales, &spec.default_locale, ctx);

    let (Some(catalog), true) = (catalog, ctx.len() == before) else {
        return None;
    };

    Some(LocaleDeviceConfig {
        enable: spec.enable,
        param: spec.param.clone(),
        cookie: spec.cookie.clone(),
        sources,
        redirect,
        canonical: spec.canonical,
        except,
        save_to_cookie: spec.save_to_cookie,
        catalog,
    })
}

fn validate_sources(raw: &[String], ctx: &mut ValidationCtx) -> SmallVec<[Source; 5]> {
    let mut sources = SmallVec::new();
    let mut invalid = Vec::new();

    for name in raw {
        match name.parse::<Source>() {
            Ok(source) if sources.contains(&source) => {
                ctx.push(ConfigError::DuplicateSource {
                    source_name: name.clone(),
                });
            }
            Ok(source) => sources.push(source),
            Err(()) => invalid.push(name.clone()),
        }
    }

    if !invalid.is_empty() {
        ctx.push(ConfigError::InvalidSources { sources: invalid });
    }

    sources
}

fn validate_redirect(raw: Option<&str>, ctx: &mut ValidationCtx) -> Option<RedirectTarget> {
    match raw {
        None | Some("none") => None,
        Some(target) => match target.parse::<RedirectTarget>() {
            Ok(target) => Some(target),
            Err(()) => {
                ctx.push(ConfigError::InvalidRedirect {
                    redirect: target.to_string(),
                });
                None
            }
        },
    }
}

fn validate_except(raw: Option<&str>, ctx: &mut ValidationCtx) -> Option<Regex> {
    let pattern = raw?;
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(source) => {
            ctx.push(ConfigError::InvalidExceptPattern {
                pattern: pattern.to_string(),
                source,
            });
            None
        }
    }
}

fn validate_catalog(
    available: &[String],
    default: &str,
    ctx: &mut ValidationCtx,
) -> Option<LocaleCatalog> {
    let mut locales = Vec::with_capacity(available.len());
    for raw in available {
        match Locale::parse(raw) {
            Some(locale) => locales.push(locale),
            None => ctx.push(ConfigError::InvalidLocale {
                locale: raw.clone(),
            }),
        }
    }

    let Some(default_locale) = Locale::parse(default) else {
        ctx.push(ConfigError::InvalidLocale {
            locale: default.to_string(),
        });
        return None;
    };

    match LocaleCatalog::new(locales, default_locale) {
        Ok(catalog) => Some(catalog),
        Err(CatalogError::Empty) => {
            ctx.push(ConfigError::EmptyLocaleCatalog);
            None
        }
        Err(CatalogError::DefaultUnavailable(locale)) => {
            ctx.push(ConfigError::DefaultLocaleUnavailable {
                locale: locale.to_string(),
            });
            None
        }
    }
}

/// Query keys are matched verbatim, so they must not contain query syntax.
fn is_param_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_graphic() && !matches!(b, b'&' | b'=' | b'#' | b'?'))
}

/// RFC 6265 cookie-name: an RFC 2616 token.
fn is_cookie_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_graphic()
                && !matches!(
                    b,
                    b'(' | b')'
                        | b'<'
                        | b'>'
                        | b'@'
                        | b','
                        | b';'
                        | b':'
                        | b'\\'
                        | b'"'
                        | b'/'
                        | b'['
                        | b']'
                        | b'?'
                        | b'='
                        | b'{'
                        | b'}'
                )
        })
}
