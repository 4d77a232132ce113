use crate::ctx::{RequestCtx, ResponseCtx};

/// The downstream application invoked once the devices let a request through.
///
/// It receives the (possibly rewritten) request, including the resolved locale
/// in its extensions, and produces the response.
pub trait Handler: Send + Sync {
    fn handle(&self, ctx: &RequestCtx) -> ResponseCtx;
}

impl<F> Handler for F
where
    F: Fn(&RequestCtx) -> ResponseCtx + Send + Sync,
{
    fn handle(&self, ctx: &RequestCtx) -> ResponseCtx {
        self(ctx)
    }
}
