use crate::conf::types::{DeviceConfig, DeviceSpec, LocaleDeviceConfig, LocaleDeviceSpec};
use crate::conf::validation::validator::validate_locale_device;
use crate::conf::validation::{ConfigError, ValidationCtx, ValidationErrors};

/// Validates every parsed device, aggregating all semantic errors.
pub fn validate_devices(specs: &[DeviceSpec]) -> Result<Vec<DeviceConfig>, ValidationErrors> {
    let mut ctx = ValidationCtx::default();
    let mut devices = Vec::with_capacity(specs.len());

    for spec in specs {
        match spec {
            DeviceSpec::Locale(spec) => {
                if let Some(cfg) = validate_locale_device(spec, &mut ctx) {
                    devices.push(DeviceConfig::Locale(cfg));
                }
            }
        }
    }

    ctx.into_result()?;
    Ok(devices)
}

impl TryFrom<LocaleDeviceSpec> for LocaleDeviceConfig {
    type Error = ConfigError;

    fn try_from(spec: LocaleDeviceSpec) -> Result<Self, Self::Error> {
        let mut ctx = ValidationCtx::default();
        match validate_locale_device(&spec, &mut ctx) {
            Some(cfg) => Ok(cfg),
            None => Err(ctx.into_errors().into()),
        }
    }
}
