//! Branch-depth color palette.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Returned when a string is not of the form `#RRGGBB`.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("expected a color of the form #RRGGBB")]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseColorError)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError);
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError);
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Segment colors ordered by branch depth: greens for the trunk, browns for deep twigs.
pub const PALETTE: [Color; 5] = [
    Color::rgb(0x2E, 0x8B, 0x57), // sea green
    Color::rgb(0x22, 0x8B, 0x22), // forest green
    Color::rgb(0x00, 0x64, 0x00), // dark green
    Color::rgb(0x8B, 0x45, 0x13), // saddle brown
    Color::rgb(0xA0, 0x52, 0x2D), // sienna
];

/// Color for a segment drawn at the given stack depth. Deeper branches reuse colors cyclically.
pub fn depth_color(depth: usize) -> Color {
    PALETTE[depth % PALETTE.len()]
}
