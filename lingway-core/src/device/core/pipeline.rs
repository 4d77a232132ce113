use super::{Device, DeviceResult, Handler};
use crate::ctx::{RequestCtx, ResponseCtx};
use std::sync::Arc;

pub struct DevicePipeline;

impl DevicePipeline {
    /// Runs one request through the devices and the downstream handler.
    ///
    /// Order:
    /// 1. `on_request` of every device; a `Respond` short-circuits
    /// 2. the downstream handler
    /// 3. `on_response` of every device
    pub fn dispatch(
        devices: &[Arc<dyn Device>],
        ctx: &mut RequestCtx,
        handler: &dyn Handler,
    ) -> ResponseCtx {
        match Self::run_on_request(devices, ctx) {
            DeviceResult::Continue => {}
            DeviceResult::Respond(resp) => return resp,
            DeviceResult::Error(_) => return ResponseCtx::internal_error(),
        }

        let mut resp = handler.handle(ctx);

        match Self::run_on_response(devices, ctx, &mut resp) {
            DeviceResult::Continue => resp,
            DeviceResult::Respond(replacement) => replacement,
            DeviceResult::Error(_) => ResponseCtx::internal_error(),
        }
    }

    /// Non-fatal errors are reported and skipped; fatal errors stop the pipeline.
    pub fn run_on_request(devices: &[Arc<dyn Device>], ctx: &mut RequestCtx) -> DeviceResult {
        for dev in devices {
            match dev.on_request(ctx) {
                DeviceResult::Continue => continue,
                r @ DeviceResult::Respond(_) => return r,
                DeviceResult::Error(err) => {
                    dev.on_error(&err);
                    if err.fatal {
                        tracing::error!(error = %err, "device failed on request");
                        return DeviceResult::Error(err);
                    }
                    tracing::warn!(error = %err, "device degraded on request");
                }
            }
        }
        DeviceResult::Continue
    }

    pub fn run_on_response(
        devices: &[Arc<dyn Device>],
        req: &RequestCtx,
        resp: &mut ResponseCtx,
    ) -> DeviceResult {
        for dev in devices {
            match dev.on_response(req, resp) {
                DeviceResult::Continue => continue,
                r @ DeviceResult::Respond(_) => return r,
                DeviceResult::Error(err) => {
                    dev.on_error(&err);
                    if err.fatal {
                        tracing::error!(error = %err, "device failed on response");
                        return DeviceResult::Error(err);
                    }
                    tracing::warn!(error = %err, "device degraded on response");
                }
            }
        }
        DeviceResult::Continue
    }
}
