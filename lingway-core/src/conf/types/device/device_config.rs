use crate::conf::types::{LocaleDeviceConfig, LocaleDeviceSpec};

/// Device settings as parsed from a device file.
#[derive(Debug, Clone)]
pub enum DeviceSpec {
    Locale(LocaleDeviceSpec),
}

/// Device settings after validation.
#[derive(Debug, Clone)]
pub enum DeviceConfig {
    Locale(LocaleDeviceConfig),
}

impl DeviceConfig {
    pub fn enabled(&self) -> bool {
        match self {
            DeviceConfig::Locale(cfg) => cfg.enable,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DeviceConfig::Locale(_) => "locale",
        }
    }
}
