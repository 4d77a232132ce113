use crate::locale::LocaleCatalog;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

//-----------------------------------------------------------------------------
// Sources and redirect targets
//-----------------------------------------------------------------------------

/// A request signal consulted for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Param,
    Path,
    Host,
    Header,
    Cookie,
}

impl Source {
    pub const ALL: [Source; 5] = [
        Source::Param,
        Source::Path,
        Source::Host,
        Source::Header,
        Source::Cookie,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Param => "param",
            Source::Path => "path",
            Source::Host => "host",
            Source::Header => "header",
            Source::Cookie => "cookie",
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or(())
    }
}

/// Where the canonical locale marker lives in a redirected URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RedirectTarget {
    Param,
    Path,
    Host,
}

impl RedirectTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedirectTarget::Param => "param",
            RedirectTarget::Path => "path",
            RedirectTarget::Host => "host",
        }
    }
}

impl Display for RedirectTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedirectTarget {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "param" => Ok(RedirectTarget::Param),
            "path" => Ok(RedirectTarget::Path),
            "host" => Ok(RedirectTarget::Host),
            _ => Err(()),
        }
    }
}

//-----------------------------------------------------------------------------
// Operator-facing spec
//-----------------------------------------------------------------------------

/// Locale device settings as written by the operator.
///
/// Values are kept as raw strings so validation can report every offending
/// value at once. See [`LocaleDeviceConfig`] for the validated form.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleDeviceSpec {
    #[serde(default = "default_enable")]
    pub enable: bool,

    /// Query parameter carrying the locale.
    #[serde(default = "default_name")]
    pub param: String,

    /// Cookie read (and optionally written) for the locale.
    #[serde(default = "default_name")]
    pub cookie: String,

    /// Sources in override priority order. A single string is accepted.
    #[serde(default = "default_sources", deserialize_with = "one_or_many")]
    pub source: Vec<String>,

    #[serde(default)]
    pub redirect: Option<String>,

    #[serde(default)]
    pub canonical: bool,

    /// Requests whose path matches this regex bypass the device.
    #[serde(default)]
    pub except: Option<String>,

    #[serde(default)]
    pub save_to_cookie: bool,

    //-------------------------------------------------------------------------
    // Locale catalog
    //-------------------------------------------------------------------------
    pub available_locales: Vec<String>,

    pub default_locale: String,
}

impl LocaleDeviceSpec {
    pub fn new<S: Into<String>>(
        available_locales: impl IntoIterator<Item = S>,
        default_locale: impl Into<String>,
    ) -> Self {
        Self {
            enable: default_enable(),
            param: default_name(),
            cookie: default_name(),
            source: default_sources(),
            redirect: None,
            canonical: false,
            except: None,
            save_to_cookie: false,
            available_locales: available_locales.into_iter().map(Into::into).collect(),
            default_locale: default_locale.into(),
        }
    }
}

fn default_enable() -> bool {
    true
}

fn default_name() -> String {
    "locale".to_string()
}

fn default_sources() -> Vec<String> {
    Source::ALL.iter().map(|s| s.as_str().to_string()).collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(source) => vec![source],
        OneOrMany::Many(sources) => sources,
    })
}

//-----------------------------------------------------------------------------
// Validated runtime config
//-----------------------------------------------------------------------------

/// Validated, immutable locale device configuration.
#[derive(Debug, Clone)]
pub struct LocaleDeviceConfig {
    pub enable: bool,
    pub param: String,
    pub cookie: String,
    pub sources: SmallVec<[Source; 5]>,
    pub redirect: Option<RedirectTarget>,
    pub canonical: bool,
    pub except: Option<Regex>,
    pub save_to_cookie: bool,
    pub catalog: LocaleCatalog,
}

impl LocaleDeviceConfig {
    /// True when extractors strip the tokens they match.
    pub fn rewrites(&self) -> bool {
        self.redirect.is_some()
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.except.as_ref().is_some_and(|re| re.is_match(path))
    }
}
