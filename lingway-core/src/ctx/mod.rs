mod request_ctx;
mod resolved_locale;
mod response_ctx;

pub use request_ctx::*;
pub use resolved_locale::*;
pub use response_ctx::*;
