//! Straight-alpha float color

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// RGBA color with components in [0, 1], straight (non-premultiplied) alpha
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Create a new color
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Pack into 8-bit RGBA bytes, clamping each component
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Parse a `#rrggbb` or `#rgb` hex string into an opaque color
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;

        let channels: [u8; 3] = match digits.len() {
            6 => {
                let mut out = [0u8; 3];
                for (i, chunk) in out.iter_mut().enumerate() {
                    *chunk = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok()?;
                }
                out
            }
            3 => {
                let mut out = [0u8; 3];
                for (i, chunk) in out.iter_mut().enumerate() {
                    let nibble = u8::from_str_radix(&digits[i..i + 1], 16).ok()?;
                    *chunk = nibble << 4 | nibble;
                }
                out
            }
            _ => return None,
        };

        Some(Self::rgb(
            channels[0] as f32 / 255.0,
            channels[1] as f32 / 255.0,
            channels[2] as f32 / 255.0,
        ))
    }
}
