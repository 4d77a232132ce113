mod error;
mod validate;
mod validation_ctx;
pub mod validator;

pub use error::ConfigError;
pub use validate::validate_devices;
pub use validation_ctx::{ValidationCtx, ValidationErrors};
