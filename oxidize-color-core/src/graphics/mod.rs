mod color;
mod device;
mod named;
mod parse;

pub use color::{Channel, Color};
pub use device::DeviceColor;
