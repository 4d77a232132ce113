pub mod cli;
pub mod conf;
pub mod ctx;
pub mod device;
pub mod locale;
pub mod logging;
