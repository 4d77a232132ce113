use std::fmt::{Display, Formatter};

/// Represents an error that occurred while a device processed a request.
///
/// Non-fatal errors are reported through [`Device::on_error`] and the request
/// carries on; fatal errors end the request with a 500 response.
///
/// [`Device::on_error`]: crate::device::core::Device::on_error
#[derive(Debug)]
pub struct DeviceError {
    /// A descriptive message explaining the error that occurred
    pub message: String,
    /// Whether the error is considered fatal and should be reported to the client
    pub fatal: bool,
}

impl DeviceError {
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fatal: false,
        }
    }
}

impl Display for DeviceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fatal = if self.fatal { "(fatal) " } else { "" };
        write!(f, "{}{}", fatal, self.message)
    }
}

impl std::error::Error for DeviceError {}
