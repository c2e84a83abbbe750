//! # oxidize-color
//!
//! Packed ARGB color values for PDF generation.
//!
//! ## Features
//!
//! - **Packed storage**: one `u32` per color, laid out as `alpha << 24 | red << 16 | green << 8 | blue`
//! - **Validated construction**: integer and float channel constructors reject values outside 0..=255
//! - **Brighter / darker**: fixed 0.7 scaling with a floor so near-black colors still brighten
//! - **Named colors**: `const` instances such as [`Color::ORANGE`] and [`Color::LIGHT_GRAY`]
//! - **Parsing**: `#RRGGBB`, `#AARRGGBB`, `r,g,b[,a]` and color names through [`std::str::FromStr`]
//! - **PDF bridge**: conversion to [`DeviceColor`] and its `rg`/`RG` content-stream operators
//! - **Serde** (optional `serde` feature): colors serialize as their packed value
//!
//! ## Quick Start
//!
//! ```rust
//! use oxidize_color::{Color, Result};
//!
//! # fn main() -> Result<()> {
//! let accent = Color::rgb(100, 100, 100)?;
//! assert_eq!(accent.darker(), Color::rgb(70, 70, 70)?);
//!
//! let parsed: Color = "#FF8000".parse()?;
//! assert_eq!(parsed.red(), 255);
//! assert_eq!(format!("{parsed:?}"), "Color value[FFFF8000]");
//!
//! // Out-of-range channels are rejected
//! assert!(Color::rgb(256, 0, 0).is_err());
//!
//! // Content-stream operator for a fill
//! assert_eq!(Color::RED.to_device().fill_operator(), "1.000 0.000 0.000 rg");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`graphics`] - the [`Color`] value type, named colors and the device color bridge
//! - [`error`] - error type shared by every fallible constructor

pub mod error;
pub mod graphics;

pub use error::{ColorError, Result};
pub use graphics::{Channel, Color, DeviceColor};
