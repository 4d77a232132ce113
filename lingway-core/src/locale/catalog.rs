use crate::locale::LocaleToken;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Canonical locale identifier, e.g. `de` or `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Canonicalizes a raw token without checking it against any catalog.
    pub fn parse(raw: &str) -> Option<Self> {
        LocaleToken::parse(raw.trim()).map(|token| Self(token.canonical()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("the set of available locales is empty")]
    Empty,

    #[error("default locale '{0}' is not an available locale")]
    DefaultUnavailable(Locale),
}

/// The set of locales the application can serve, plus its default.
///
/// Immutable once built. The default is always a member.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    available: BTreeSet<Locale>,
    default: Locale,
}

impl LocaleCatalog {
    pub fn new(
        available: impl IntoIterator<Item = Locale>,
        default: Locale,
    ) -> Result<Self, CatalogError> {
        let available: BTreeSet<Locale> = available.into_iter().collect();

        if available.is_empty() {
            return Err(CatalogError::Empty);
        }

        if !available.contains(&default) {
            return Err(CatalogError::DefaultUnavailable(default));
        }

        Ok(Self { available, default })
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default
    }

    pub fn contains(&self, locale: &Locale) -> bool {
        self.available.contains(locale)
    }

    pub fn len(&self) -> usize {
        self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Validates a raw (language, region) pair against the catalog.
    ///
    /// Input is case-insensitive. An empty language, a malformed subtag, or a
    /// locale outside the catalog all yield `None`.
    pub fn normalize(&self, language: &str, region: Option<&str>) -> Option<Locale> {
        if language.is_empty() {
            return None;
        }

        let raw = match region {
            Some(region) => format!("{language}-{region}"),
            None => language.to_string(),
        };

        LocaleToken::parse(&raw).and_then(|token| self.normalize_token(token))
    }

    pub fn normalize_token(&self, token: LocaleToken<'_>) -> Option<Locale> {
        let locale = Locale(token.canonical());
        self.available.contains(&locale).then_some(locale)
    }
}
