//! RGBA colors parsed from and serialized to hex strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a valid hex color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color '{input}': expected #rgb, #rrggbb or #rrggbbaa")]
pub struct ColorParseError {
    pub input: String,
}

/// An sRGB color with alpha.
///
/// Colors read from scheme files and written to style records as hex
/// strings. Opaque colors serialize as `#rrggbb`, translucent ones as
/// `#rrggbbaa`.
///
/// # Example
///
/// ```rust
/// use stylecraft::Color;
///
/// let c: Color = "#1e1f2b".parse().unwrap();
/// assert_eq!(c, Color::rgb(0x1e, 0x1f, 0x2b));
/// assert_eq!(c.to_string(), "#1e1f2b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with a different alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns true when the alpha channel is fully opaque.
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Converts to the nearest ANSI 256-color palette index, ignoring alpha.
    ///
    /// Grays map onto the 24-step grayscale ramp (`8 + 10 * i`), everything
    /// else onto the 6x6x6 color cube, whose channel levels are
    /// `0, 95, 135, 175, 215, 255`. Each channel snaps to its closest level.
    ///
    /// ```rust
    /// use stylecraft::Color;
    ///
    /// assert_eq!(Color::rgb(255, 0, 0).to_ansi256(), 196);
    /// assert_eq!(Color::rgb(254, 1, 1).to_ansi256(), 196);
    /// assert_eq!(Color::rgb(0, 255, 0).to_ansi256(), 46);
    /// ```
    pub fn to_ansi256(&self) -> u8 {
        let (r, g, b) = (self.r, self.g, self.b);
        if r == g && g == b {
            if r < 4 {
                16
            } else if r > 246 {
                231
            } else {
                232 + ((r.saturating_sub(8) as u16 + 5) / 10).min(23) as u8
            }
        } else {
            16 + 36 * cube_level(r) + 6 * cube_level(g) + cube_level(b)
        }
    }
}

/// Index of the xterm cube level closest to `c`.
fn cube_level(c: u8) -> u8 {
    match c {
        0..=47 => 0,
        48..=114 => 1,
        _ => (c - 35) / 40,
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let short = |i: usize| {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map(|v| v * 17)
                .map_err(|_| err())
        };

        match hex.len() {
            3 => Ok(Color::rgb(short(0)?, short(1)?, short(2)?)),
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}
