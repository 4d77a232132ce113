use crate::conf::parse::parse_devices;
use crate::conf::types::DeviceConfig;
use crate::conf::validation::{ConfigError, validate_devices};
use std::path::Path;

/// Loads and validates a device file.
///
/// IO and parse failures are hard failures; semantic problems are aggregated
/// into a single [`ConfigError::Validation`].
pub fn load_devices(path: &Path) -> Result<Vec<DeviceConfig>, ConfigError> {
    let specs = parse_devices(path)?;

    if specs.is_empty() {
        return Err(ConfigError::NoDevices {
            path: path.to_path_buf(),
        });
    }

    let devices = validate_devices(&specs)?;
    tracing::debug!(path = %path.display(), devices = devices.len(), "loaded device config");

    Ok(devices)
}
