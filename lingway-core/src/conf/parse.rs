use crate::conf::types::{DeviceSpec, LocaleDeviceSpec};
use crate::conf::validation::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct DevicesFile {
    locale_device: Option<LocaleDeviceSpec>,
}

pub fn parse_devices(path: &Path) -> Result<Vec<DeviceSpec>, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_devices_str(path, &s)
}

/// Parses device file contents; `path` is only used for error reporting.
pub fn parse_devices_str(path: &Path, s: &str) -> Result<Vec<DeviceSpec>, ConfigError> {
    let parsed: DevicesFile = hcl::from_str(s).map_err(|e| ConfigError::parse(path, e))?;

    let mut device_specs = Vec::new();

    if let Some(locale) = parsed.locale_device {
        device_specs.push(DeviceSpec::Locale(locale));
    }

    Ok(device_specs)
}
