use super::Color;

impl Color {
    pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::from_rgb8(192, 192, 192);
    pub const GRAY: Color = Color::from_rgb8(128, 128, 128);
    pub const DARK_GRAY: Color = Color::from_rgb8(64, 64, 64);
    pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
    pub const RED: Color = Color::from_rgb8(255, 0, 0);
    pub const PINK: Color = Color::from_rgb8(255, 175, 175);
    pub const ORANGE: Color = Color::from_rgb8(255, 200, 0);
    pub const YELLOW: Color = Color::from_rgb8(255, 255, 0);
    pub const GREEN: Color = Color::from_rgb8(0, 255, 0);
    pub const MAGENTA: Color = Color::from_rgb8(255, 0, 255);
    pub const CYAN: Color = Color::from_rgb8(0, 255, 255);
    pub const BLUE: Color = Color::from_rgb8(0, 0, 255);

    /// Every named color, in declaration order.
    pub const NAMED: &'static [(&'static str, Color)] = &[
        ("white", Color::WHITE),
        ("light_gray", Color::LIGHT_GRAY),
        ("gray", Color::GRAY),
        ("dark_gray", Color::DARK_GRAY),
        ("black", Color::BLACK),
        ("red", Color::RED),
        ("pink", Color::PINK),
        ("orange", Color::ORANGE),
        ("yellow", Color::YELLOW),
        ("green", Color::GREEN),
        ("magenta", Color::MAGENTA),
        ("cyan", Color::CYAN),
        ("blue", Color::BLUE),
    ];

    /// Looks up a named color.
    ///
    /// Matching ignores case and word separators, so `"LightGray"`,
    /// `"light-gray"` and `"light_gray"` all resolve to [`Color::LIGHT_GRAY`].
    pub fn from_name(name: &str) -> Option<Color> {
        let wanted = normalize(name);
        Self::NAMED
            .iter()
            .find(|(candidate, _)| normalize(candidate) == wanted)
            .map(|&(_, color)| color)
    }

    /// Name of this color if it is one of [`Color::NAMED`].
    pub fn name(&self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, color)| color == self)
            .map(|&(name, _)| name)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
