//! Color representation for CMC fields

use std::fmt;

/// Entity/table color as stored in a CMC field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
    /// True color with RGB values (R2004+; approximated to an index before)
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create a color from an AutoCAD Color Index
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ if index < 0 => Color::Index((-index).min(255) as u8),
            _ => Color::Index(7),
        }
    }

    /// Create a true color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// The index written by pre-R2004 CMC fields.
    pub fn approximate_index(&self) -> i16 {
        match self {
            Color::ByBlock => 0,
            Color::ByLayer => 256,
            Color::Index(i) => *i as i16,
            Color::Rgb { r, g, b } => {
                let brightness = ((*r as u16) + (*g as u16) + (*b as u16)) / 3;
                if brightness < 32 {
                    8
                } else if brightness > 224 {
                    7
                } else if *r > *g && *r > *b {
                    1
                } else if *g > *r && *g > *b {
                    3
                } else if *b > *r && *b > *g {
                    5
                } else {
                    7
                }
            }
        }
    }

    /// The 32-bit RGB word of an R2004+ CMC field (method byte in the top byte).
    pub fn rgb_word(&self) -> u32 {
        match self {
            Color::ByLayer => 0xC000_0000,
            Color::ByBlock => 0xC100_0000,
            Color::Index(i) => 0xC300_0000 | *i as u32,
            Color::Rgb { r, g, b } => {
                0xC200_0000 | (*r as u32) << 16 | (*g as u32) << 8 | *b as u32
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
            Color::Rgb { r, g, b } => write!(f, "RGB({}, {}, {})", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_index() {
        assert_eq!(Color::from_index(0), Color::ByBlock);
        assert_eq!(Color::from_index(256), Color::ByLayer);
        assert_eq!(Color::from_index(1), Color::Index(1));
        assert_eq!(Color::from_index(-5), Color::Index(5));
    }

    #[test]
    fn test_approximate_index() {
        assert_eq!(Color::ByLayer.approximate_index(), 256);
        assert_eq!(Color::from_rgb(250, 10, 10).approximate_index(), 1);
        assert_eq!(Color::from_rgb(255, 255, 255).approximate_index(), 7);
    }

    #[test]
    fn test_rgb_word() {
        assert_eq!(Color::from_rgb(0x12, 0x34, 0x56).rgb_word(), 0xC212_3456);
        assert_eq!(Color::Index(3).rgb_word(), 0xC300_0003);
        assert_eq!(Color::ByLayer.rgb_word(), 0xC000_0000);
    }
}
