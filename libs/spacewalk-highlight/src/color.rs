//! # Color
//!
//! RGB colors as stored in point-cloud color buffers.

use config::constants::{COLOR_COMPONENTS, DEEMPHASIZED_COLOR, HIGHLIGHT_COLOR};
use serde::{Deserialize, Serialize};

/// Linear RGB color with components in [0.0, 1.0].
///
/// # Example
///
/// ```rust
/// use spacewalk_highlight::Color;
///
/// let red = Color::from_hex("#ff0000").unwrap();
/// assert_eq!(red, Color::new(1.0, 0.0, 0.0));
/// assert_eq!(Color::from_rgb255(255, 0, 0), red);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
}

impl Color {
    /// Shared deemphasized gray.
    pub const DEEMPHASIZED: Color = Color::from_array(DEEMPHASIZED_COLOR);

    /// Pick highlight color.
    pub const HIGHLIGHT: Color = Color::from_array(HIGHLIGHT_COLOR);

    /// Creates a color from float components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from an `[r, g, b]` array.
    pub const fn from_array([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit channels.
    pub fn from_rgb255(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parses `#rrggbb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::from_rgb255(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Components as an `[r, g, b]` array.
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Color {
    fn from(rgb: [f32; 3]) -> Self {
        Self::from_array(rgb)
    }
}

/// Writes `color` into every RGB triple of a color buffer.
///
/// A trailing partial triple is left untouched.
///
/// # Example
///
/// ```rust
/// use spacewalk_highlight::{set_geometry_color_attribute, Color};
///
/// let mut buffer = vec![0.0; 6];
/// set_geometry_color_attribute(&mut buffer, Color::new(0.1, 0.2, 0.3));
/// assert_eq!(buffer, vec![0.1, 0.2, 0.3, 0.1, 0.2, 0.3]);
/// ```
pub fn set_geometry_color_attribute(buffer: &mut [f32], color: Color) {
    let rgb = color.to_array();
    for chunk in buffer.chunks_exact_mut(COLOR_COMPONENTS) {
        chunk.copy_from_slice(&rgb);
    }
}
