pub mod errors;
pub mod handler;
pub mod pipeline;
pub mod registry;
pub mod result;
#[cfg(test)]
mod tests;

use self::errors::DeviceError;
pub use self::handler::Handler;
pub use self::pipeline::DevicePipeline;
pub use self::registry::DeviceRegistry;
pub use self::result::DeviceResult;
use crate::ctx::{RequestCtx, ResponseCtx};

/// A trait representing a processing unit in the request pipeline.
///
/// Devices can intercept and modify requests/responses around the downstream
/// handler. Each device must be both Send and Sync so a single instance can
/// serve concurrent requests.
///
/// All methods provide default implementations that simply continue the pipeline,
/// allowing implementations to override only the methods they care about.
pub trait Device: Send + Sync {
    /// Called when a request is first received, before the downstream handler.
    ///
    /// Returning [`DeviceResult::Respond`] short-circuits the request.
    fn on_request(&self, _ctx: &mut RequestCtx) -> DeviceResult {
        DeviceResult::Continue
    }

    /// Called after the downstream handler produced a response.
    ///
    /// The request context is the one the handler saw.
    fn on_response(&self, _req: &RequestCtx, _resp: &mut ResponseCtx) -> DeviceResult {
        DeviceResult::Continue
    }

    /// Called when this device reported an error.
    fn on_error(&self, _err: &DeviceError) {}
}
