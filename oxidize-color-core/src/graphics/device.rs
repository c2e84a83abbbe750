use super::Color;

/// Operand of a PDF color-setting operator.
///
/// Components are fractions of full intensity, as the `rg`, `g` and `k`
/// family of operators expect them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceColor {
    /// DeviceRGB operand of `rg` / `RG`
    Rgb(f64, f64, f64),
    /// DeviceGray operand of `g` / `G`
    Gray(f64),
    /// DeviceCMYK operand of `k` / `K`
    Cmyk(f64, f64, f64, f64),
}

impl DeviceColor {
    /// DeviceRGB operand with each component clamped to 0.0-1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        DeviceColor::Rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Operator selecting this color for filling (`rg`, `g` or `k`).
    pub fn fill_operator(&self) -> String {
        match *self {
            DeviceColor::Rgb(r, g, b) => format!("{r:.3} {g:.3} {b:.3} rg"),
            DeviceColor::Gray(g) => format!("{g:.3} g"),
            DeviceColor::Cmyk(c, m, y, k) => format!("{c:.3} {m:.3} {y:.3} {k:.3} k"),
        }
    }

    /// Operator selecting this color for stroking (`RG`, `G` or `K`).
    pub fn stroke_operator(&self) -> String {
        match *self {
            DeviceColor::Rgb(r, g, b) => format!("{r:.3} {g:.3} {b:.3} RG"),
            DeviceColor::Gray(g) => format!("{g:.3} G"),
            DeviceColor::Cmyk(c, m, y, k) => format!("{c:.3} {m:.3} {y:.3} {k:.3} K"),
        }
    }
}

impl From<Color> for DeviceColor {
    fn from(color: Color) -> Self {
        DeviceColor::rgb(
            f64::from(color.red()) / 255.0,
            f64::from(color.green()) / 255.0,
            f64::from(color.blue()) / 255.0,
        )
    }
}

impl Color {
    /// Alpha as a 0.0-1.0 opacity, suitable for the `/ca` and `/CA` entries
    /// of an ExtGState.
    pub fn opacity(&self) -> f64 {
        f64::from(self.alpha()) / 255.0
    }

    /// DeviceRGB operand for this color; alpha goes through [`Color::opacity`].
    pub fn to_device(&self) -> DeviceColor {
        DeviceColor::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_clamps_components() {
        assert_eq!(DeviceColor::rgb(1.5, -0.5, 0.5), DeviceColor::Rgb(1.0, 0.0, 0.5));
    }

    #[test]
    fn test_from_color() {
        assert_eq!(DeviceColor::from(Color::RED), DeviceColor::Rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::BLACK.to_device(), DeviceColor::Rgb(0.0, 0.0, 0.0));
        assert_eq!(Color::WHITE.to_device(), DeviceColor::Rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_from_color_ignores_alpha() {
        let translucent = Color::rgba(255, 0, 0, 0).unwrap();
        assert_eq!(translucent.to_device(), Color::RED.to_device());
    }

    #[test]
    fn test_fill_operator() {
        assert_eq!(Color::ORANGE.to_device().fill_operator(), "1.000 0.784 0.000 rg");
        assert_eq!(DeviceColor::Gray(0.5).fill_operator(), "0.500 g");
        assert_eq!(
            DeviceColor::Cmyk(0.1, 0.2, 0.3, 0.4).fill_operator(),
            "0.100 0.200 0.300 0.400 k"
        );
    }

    #[test]
    fn test_stroke_operator() {
        assert_eq!(Color::BLUE.to_device().stroke_operator(), "0.000 0.000 1.000 RG");
        assert_eq!(DeviceColor::Gray(1.0).stroke_operator(), "1.000 G");
        assert_eq!(
            DeviceColor::Cmyk(0.0, 0.0, 0.0, 1.0).stroke_operator(),
            "0.000 0.000 0.000 1.000 K"
        );
    }

    #[test]
    fn test_opacity() {
        assert_eq!(Color::WHITE.opacity(), 1.0);
        assert_eq!(Color::from_argb(0x00FF_FFFF).opacity(), 0.0);
        let half = Color::rgba(0, 0, 0, 51).unwrap().opacity();
        assert!((half - 0.2).abs() < 1e-9);
    }
}
