mod device_config;
mod locale;

pub use device_config::*;
pub use locale::*;
