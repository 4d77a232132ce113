mod loader;
mod parse;
pub mod types;
pub(crate) mod validation;

pub use loader::load_devices;
pub use parse::{parse_devices, parse_devices_str};
pub use types::{DeviceConfig, DeviceSpec};
pub use validation::{ConfigError, ValidationErrors, validate_devices};
