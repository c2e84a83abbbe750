use crate::graphics::Channel;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A channel was outside 0..=255 after any float scaling.
    ///
    /// Float channels that are not finite are reported here too, carrying the
    /// offending scaled value.
    #[error("Color value outside range 0..255: {channel} = {value}")]
    ChannelOutOfRange { channel: Channel, value: f64 },

    #[error("Invalid color format: {0}")]
    InvalidFormat(String),

    #[error("Unknown color name: {0}")]
    UnknownName(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;
