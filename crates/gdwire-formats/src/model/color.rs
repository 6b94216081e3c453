//! RGB colors and the player color palette

use std::fmt;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// White, the default for comments and packs without a color tag
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Build a color from channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse an `r,g,b` triplet
    pub fn parse_rgb(text: &str) -> Option<Self> {
        let mut channels = text.split(',').map(|part| part.trim().parse::<u8>());
        let color = match (channels.next(), channels.next(), channels.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b))) => Self::from_rgb(r, g, b),
            _ => return None,
        };

        channels.next().is_none().then_some(color)
    }

    /// Player color at `index` in the icon kit palette
    pub fn player(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| PLAYER_COLORS.get(i))
            .map(|&(r, g, b)| Self::from_rgb(r, g, b))
    }

    /// Packed `0xRRGGBB` value
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_u32())
    }
}

/// Icon kit palette, indexed by the color tags of a user record
const PLAYER_COLORS: [(u8, u8, u8); 42] = [
    (125, 255, 0),
    (0, 255, 0),
    (0, 255, 125),
    (0, 255, 255),
    (0, 125, 255),
    (0, 0, 255),
    (125, 0, 255),
    (255, 0, 255),
    (255, 0, 125),
    (255, 0, 0),
    (255, 125, 0),
    (255, 255, 0),
    (255, 255, 255),
    (185, 0, 255),
    (255, 185, 0),
    (0, 0, 0),
    (0, 200, 255),
    (175, 175, 175),
    (90, 90, 90),
    (255, 125, 125),
    (0, 175, 75),
    (0, 125, 125),
    (0, 75, 175),
    (75, 0, 175),
    (125, 0, 125),
    (175, 0, 75),
    (175, 75, 0),
    (125, 125, 0),
    (75, 175, 0),
    (255, 75, 0),
    (150, 50, 0),
    (150, 100, 0),
    (150, 150, 0),
    (0, 150, 0),
    (0, 150, 150),
    (0, 100, 150),
    (100, 0, 150),
    (150, 0, 0),
    (0, 150, 100),
    (0, 75, 0),
    (125, 125, 255),
    (255, 255, 125),
];
