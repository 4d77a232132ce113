pub mod gateway;
pub mod tracing;

pub use self::gateway::{TestGateway, TestResponse};
pub use self::tracing::{CapturedEvent, captured_events};
