use crate::conf::types::DeviceConfig;
use crate::device::builtin::locale::LocaleDevice;
use crate::device::core::Device;
use std::sync::Arc;

pub struct DeviceRegistry {
    devices: Vec<Arc<dyn Device>>,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    /// Builds every enabled device, in configuration order.
    pub fn load_from_config(&mut self, devices: Vec<DeviceConfig>) {
        for device_cfg in devices {
            if !device_cfg.enabled() {
                tracing::debug!(device = device_cfg.name(), "device disabled, skipping");
                continue;
            }

            let device: Arc<dyn Device> = match device_cfg {
                DeviceConfig::Locale(cfg) => Arc::new(LocaleDevice::from_config(cfg)),
            };

            self.devices.push(device);
        }
    }

    pub fn push(&mut self, device: Arc<dyn Device>) {
        self.devices.push(device);
    }

    pub fn all(&self) -> &[Arc<dyn Device>] {
        &self.devices
    }
}
