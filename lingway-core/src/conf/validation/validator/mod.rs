mod locale;

pub use locale::*;
