use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 6 or 8 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    /// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(ColorParseError::BadLength(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };

        let a = if hex.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

/// Colors used by the glyph routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Background tile fill.
    pub primary: Rgba,
    /// Wordmark fill.
    pub foreground: Rgba,
    /// Accent dot fill.
    pub accent: Rgba,
}

impl Palette {
    pub const DEFAULT_PRIMARY: Rgba = Rgba::opaque(0x16, 0x77, 0xFF);
    pub const DEFAULT_FOREGROUND: Rgba = Rgba::WHITE;
    pub const DEFAULT_ACCENT: Rgba = Rgba::opaque(0x40, 0x93, 0xFF);

    /// Monochrome palette for tray template icons: no tile, black marks.
    ///
    /// The host tints template icons from their alpha channel, so the accent
    /// dot is drawn in the same solid black as the wordmark.
    pub const fn tray() -> Self {
        Self {
            primary: Rgba::TRANSPARENT,
            foreground: Rgba::BLACK,
            accent: Rgba::BLACK,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Self::DEFAULT_PRIMARY,
            foreground: Self::DEFAULT_FOREGROUND,
            accent: Self::DEFAULT_ACCENT,
        }
    }
}
