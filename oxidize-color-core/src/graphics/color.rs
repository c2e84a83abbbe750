use crate::error::{ColorError, Result};
use std::fmt;

/// Scaling factor used by [`Color::brighter`] and [`Color::darker`].
const FACTOR: f64 = 0.7;

/// One of the four 8-bit channels packed into a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// All channels in the order constructors take them.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Bit offset of the channel inside the packed ARGB value.
    pub const fn shift(self) -> u32 {
        match self {
            Channel::Alpha => 24,
            Channel::Red => 16,
            Channel::Green => 8,
            Channel::Blue => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable sRGB color with alpha, stored as a single packed value.
///
/// The layout is `alpha << 24 | red << 16 | green << 8 | blue`. Equality and
/// hashing only look at that packed value, so two colors built through
/// different constructors compare equal whenever their channels agree.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color {
    value: u32,
}

impl Color {
    /// Creates a color from integer channels, each in 0..=255.
    pub fn rgba(red: i32, green: i32, blue: i32, alpha: i32) -> Result<Self> {
        Ok(Self::from_rgba8(
            validate(Channel::Red, red)?,
            validate(Channel::Green, green)?,
            validate(Channel::Blue, blue)?,
            validate(Channel::Alpha, alpha)?,
        ))
    }

    /// Creates a fully opaque color from integer channels, each in 0..=255.
    pub fn rgb(red: i32, green: i32, blue: i32) -> Result<Self> {
        Self::rgba(red, green, blue, 255)
    }

    /// Creates a color from float channels in 0.0..=1.0.
    ///
    /// Each channel is scaled by 255 in single precision, then `0.5` is added
    /// in double precision and the result is truncated toward zero before
    /// going through [`Color::rgba`].
    pub fn rgba_f32(red: f32, green: f32, blue: f32, alpha: f32) -> Result<Self> {
        Self::rgba(
            scale(Channel::Red, red)?,
            scale(Channel::Green, green)?,
            scale(Channel::Blue, blue)?,
            scale(Channel::Alpha, alpha)?,
        )
    }

    /// Creates a fully opaque color from float channels in 0.0..=1.0.
    pub fn rgb_f32(red: f32, green: f32, blue: f32) -> Result<Self> {
        Self::rgba_f32(red, green, blue, 1.0)
    }

    /// Wraps an already packed ARGB value without any validation.
    pub const fn from_argb(argb: u32) -> Self {
        Self { value: argb }
    }

    /// Packs four 8-bit channels; infallible since `u8` is always in range.
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            value: (alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32,
        }
    }

    /// Packs three 8-bit channels with alpha 255.
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, 255)
    }

    /// The packed ARGB value.
    pub const fn argb(&self) -> u32 {
        self.value
    }

    /// Extracts one channel from the packed value.
    pub const fn channel(&self, channel: Channel) -> u8 {
        ((self.value >> channel.shift()) & 0xFF) as u8
    }

    /// Red channel, `(argb >> 16) & 0xFF`.
    pub const fn red(&self) -> u8 {
        self.channel(Channel::Red)
    }

    /// Green channel, `(argb >> 8) & 0xFF`.
    pub const fn green(&self) -> u8 {
        self.channel(Channel::Green)
    }

    /// Blue channel, `(argb >> 0) & 0xFF`.
    pub const fn blue(&self) -> u8 {
        self.channel(Channel::Blue)
    }

    /// Alpha channel, `(argb >> 24) & 0xFF`.
    pub const fn alpha(&self) -> u8 {
        self.channel(Channel::Alpha)
    }

    /// Returns a brighter, fully opaque version of this color.
    ///
    /// Channels are divided by 0.7 and capped at 255. Pure black becomes a
    /// gray of `floor(1 / (1 - 0.7))` = 3, and non-zero channels below that
    /// floor are raised to it first, otherwise they would never grow.
    pub fn brighter(&self) -> Self {
        let floor = (1.0 / (1.0 - FACTOR)) as u8;
        let (mut red, mut green, mut blue) = (self.red(), self.green(), self.blue());

        if red == 0 && green == 0 && blue == 0 {
            return Self::from_rgb8(floor, floor, floor);
        }

        for channel in [&mut red, &mut green, &mut blue] {
            if *channel > 0 && *channel < floor {
                *channel = floor;
            }
        }

        Self::from_rgb8(brighten(red), brighten(green), brighten(blue))
    }

    /// Returns a darker, fully opaque version of this color.
    ///
    /// Channels are multiplied by 0.7 and truncated.
    pub fn darker(&self) -> Self {
        Self::from_rgb8(darken(self.red()), darken(self.green()), darken(self.blue()))
    }
}

fn validate(channel: Channel, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        tracing::debug!(%channel, value, "rejected color channel outside 0..255");
        ColorError::ChannelOutOfRange {
            channel,
            value: f64::from(value),
        }
    })
}

fn scale(channel: Channel, value: f32) -> Result<i32> {
    let scaled = f64::from(value * 255.0) + 0.5;
    if !scaled.is_finite() {
        tracing::debug!(%channel, value, "rejected non-finite color channel");
        return Err(ColorError::ChannelOutOfRange {
            channel,
            value: scaled,
        });
    }
    Ok(scaled as i32)
}

fn brighten(channel: u8) -> u8 {
    ((f64::from(channel) / FACTOR) as u32).min(255) as u8
}

fn darken(channel: u8) -> u8 {
    (f64::from(channel) * FACTOR) as u8
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.value
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color value[{:X}]", self.value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
