use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// 8-bit RGB triple. Deserializes from a RON tuple `(r, g, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    pub const BLACK: Self = Self(0, 0, 0);
    pub const WHITE: Self = Self(255, 255, 255);

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.0, self.1, self.2])
    }

    /// Linear blend toward `other`; `t` is clamped to 0..=1.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl From<image::Rgb<u8>> for Rgb8 {
    fn from(p: image::Rgb<u8>) -> Self {
        Self(p.0[0], p.0[1], p.0[2])
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DatasetError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| DatasetError::InvalidColor(s.to_string()))
        };
        Ok(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Foreground/background pair. `invert` swaps which one is used as ink; the
/// pair itself never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub foreground: Rgb8,
    pub background: Rgb8,
}

impl ColorPair {
    pub fn new(foreground: Rgb8, background: Rgb8) -> Self {
        Self { foreground, background }
    }

    pub fn ink(&self, invert: bool) -> Rgb8 {
        if invert {
            self.background
        } else {
            self.foreground
        }
    }

    pub fn canvas(&self, invert: bool) -> Rgb8 {
        if invert {
            self.foreground
        } else {
            self.background
        }
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::new(Rgb8::BLACK, Rgb8::WHITE)
    }
}
