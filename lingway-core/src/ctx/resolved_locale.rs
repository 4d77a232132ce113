use crate::conf::types::Source;
use crate::locale::Locale;

/// The locale governing one request, stored in [`RequestCtx::extensions`].
///
/// This is the request-scoped replacement for a process-wide "current locale".
/// Downstream handlers MUST read it from the context and MUST NOT re-parse the
/// request signals.
///
/// [`RequestCtx::extensions`]: crate::ctx::RequestCtx::extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    locale: Locale,
    source: Option<Source>,
    bypassed: bool,
}

impl ResolvedLocale {
    /// The default locale, before (or without) any source matching.
    pub fn fallback(locale: Locale) -> Self {
        Self {
            locale,
            source: None,
            bypassed: false,
        }
    }

    /// The default locale for a request excluded from locale handling.
    pub fn bypassed(locale: Locale) -> Self {
        Self {
            locale,
            source: None,
            bypassed: true,
        }
    }

    pub fn matched(locale: Locale, source: Source) -> Self {
        Self {
            locale,
            source: Some(source),
            bypassed: false,
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The source that produced the locale; `None` means the default was used.
    pub fn source(&self) -> Option<Source> {
        self.source
    }

    pub fn is_bypassed(&self) -> bool {
        self.bypassed
    }
}
