mod device;

pub use device::*;
