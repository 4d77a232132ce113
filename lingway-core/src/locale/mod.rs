mod catalog;
#[cfg(test)]
mod tests;
mod token;

pub use catalog::*;
pub use token::*;
