use crate::conf::validation::error::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Default)]
pub struct ValidationCtx {
    errors: Vec<ConfigError>,
}

impl ValidationCtx {
    pub fn push(&mut self, err: ConfigError) {
        self.errors.push(err);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> ValidationErrors {
        ValidationErrors(self.errors)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error(
    "configuration validation failed: {}",
    .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; ")
)]
pub struct ValidationErrors(#[related] pub Vec<ConfigError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ConfigError] {
        &self.0
    }
}
