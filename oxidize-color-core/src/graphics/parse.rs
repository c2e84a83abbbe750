use super::Color;
use crate::error::{ColorError, Result};
use std::str::FromStr;

impl Color {
    /// Formats the packed value as `#AARRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:08X}", self.argb())
    }
}

/// Parses `#RRGGBB`, `#AARRGGBB`, `r,g,b`, `r,g,b,a` or a color name.
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ColorError::InvalidFormat("empty color string".to_string()));
        }

        let color = if let Some(hex) = input.strip_prefix('#') {
            parse_hex(hex)?
        } else if input.contains(',') {
            parse_components(input)?
        } else {
            Color::from_name(input).ok_or_else(|| ColorError::UnknownName(input.to_string()))?
        };

        tracing::trace!(input, %color, "parsed color");
        Ok(color)
    }
}

fn parse_hex(hex: &str) -> Result<Color> {
    if hex.len() != 6 && hex.len() != 8 {
        return Err(ColorError::InvalidFormat(format!(
            "expected #RRGGBB or #AARRGGBB, got #{hex}"
        )));
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(format!(
            "invalid hex digits in #{hex}"
        )));
    }

    let value = u32::from_str_radix(hex, 16)
        .map_err(|e| ColorError::InvalidFormat(format!("#{hex}: {e}")))?;

    if hex.len() == 6 {
        Ok(Color::from_argb(0xFF00_0000 | value))
    } else {
        Ok(Color::from_argb(value))
    }
}

fn parse_components(input: &str) -> Result<Color> {
    let components = input
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i32>().map_err(|_| {
                ColorError::InvalidFormat(format!("invalid channel value '{part}' in '{input}'"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match components[..] {
        [red, green, blue] => Color::rgb(red, green, blue),
        [red, green, blue, alpha] => Color::rgba(red, green, blue, alpha),
        _ => Err(ColorError::InvalidFormat(format!(
            "expected 3 or 4 channels, got {} in '{input}'",
            components.len()
        ))),
    }
}
