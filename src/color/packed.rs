//! Packed 24-bit colors
//!
//! Colors travel through the crate as `0xRRGGBB` values, the layout the
//! clock firmware uses for its palette constants. They are only unpacked
//! into [`Rgb`] right before brightness and gamma are applied.

use crate::color::Rgb;

const CHANNEL_MASK: u32 = 0xFF;
const COLOR_MASK: u32 = 0x00FF_FFFF;

/// 24-bit color packed as `0xRRGGBB`
///
/// Red lives in bits 16..24, green in 8..16 and blue in 0..8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// All channels off
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(COLOR_MASK);
    pub const RED: Self = create_color(255, 0, 0);
    pub const GREEN: Self = create_color(0, 255, 0);
    pub const BLUE: Self = create_color(0, 0, 255);

    /// Pack three channels into a color
    #[allow(clippy::cast_lossless)]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        let mut color = red as u32;
        color <<= 8;
        color |= green as u32;
        color <<= 8;
        color |= blue as u32;
        Self(color)
    }

    /// Create a color from a raw `0xRRGGBB` value
    ///
    /// Bits above the 24th are dropped.
    pub const fn from_u32(raw: u32) -> Self {
        Self(raw & COLOR_MASK)
    }

    /// Raw `0xRRGGBB` value
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & CHANNEL_MASK) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & CHANNEL_MASK) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn blue(self) -> u8 {
        (self.0 & CHANNEL_MASK) as u8
    }

    /// Unpack into separate channels
    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.red(),
            g: self.green(),
            b: self.blue(),
        }
    }

    /// Check if every channel is off
    pub const fn is_black(self) -> bool {
        self.0 == 0
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

impl From<u32> for Color {
    fn from(raw: u32) -> Self {
        Self::from_u32(raw)
    }
}

/// Create a 24-bit color from its RGB components
///
/// Channels are typed as `u8`, so a wide value can't spill into the
/// neighbouring channel.
pub const fn create_color(red: u8, green: u8, blue: u8) -> Color {
    Color::new(red, green, blue)
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Color::from_u32(color).to_rgb()
}
