pub mod conf;
pub mod resolve;
#[cfg(test)]
mod tests;

use std::io::{self, IsTerminal};

pub fn default_output_mode() -> OutputMode {
    if io::stdout().is_terminal() {
        OutputMode::Pretty
    } else {
        OutputMode::Plain
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Plain,
    Pretty,
    Json,
}
