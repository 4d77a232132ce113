use crate::conf::validation::validation_ctx::ValidationErrors;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("no device is defined in {path}")]
    NoDevices { path: PathBuf },

    //-------------------------------------------------------------------------
    // Top-level
    //-------------------------------------------------------------------------
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation { validation_errors: ValidationErrors },

    //-------------------------------------------------------------------------
    // Locale device
    //-------------------------------------------------------------------------
    #[error("invalid param name '{param}'")]
    InvalidParamName { param: String },

    #[error("invalid cookie name '{cookie}'")]
    InvalidCookieName { cookie: String },

    #[error("invalid source(s) {}", sources.join(", "))]
    InvalidSources { sources: Vec<String> },

    #[error("duplicate source '{source_name}'")]
    DuplicateSource { source_name: String },

    #[error("invalid redirect option '{redirect}'")]
    InvalidRedirect { redirect: String },

    #[error("invalid except pattern '{pattern}': {source}")]
    InvalidExceptPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid locale '{locale}'")]
    InvalidLocale { locale: String },

    #[error("available_locales must not be empty")]
    EmptyLocaleCatalog,

    #[error("default locale '{locale}' is not listed in available_locales")]
    DefaultLocaleUnavailable { locale: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

impl From<ValidationErrors> for ConfigError {
    fn from(validation_errors: ValidationErrors) -> Self {
        ConfigError::Validation { validation_errors }
    }
}
