//! Global brightness
//!
//! WS2812 rings are painfully bright at full duty, so every channel is
//! scaled down before gamma correction. The scale is kept inside
//! `[Brightness::MIN, Brightness::MAX]`.

use crate::color::Rgb;

/// Brightness scale applied to every channel
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Brightness(f32);

impl Brightness {
    /// Lowest accepted brightness
    pub const MIN: f32 = 0.01;
    /// Highest accepted brightness
    pub const MAX: f32 = 0.8;

    /// Create a brightness, clamping the value into the accepted range
    ///
    /// `NaN` is treated as the minimum.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub const fn value(self) -> f32 {
        self.0
    }

    /// Scale a single channel
    ///
    /// The fractional part is dropped.
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scale(self, channel: u8) -> u8 {
        (f32::from(channel) * self.0) as u8
    }

    /// Scale every channel of a color
    #[inline]
    pub fn scale_rgb(self, color: Rgb) -> Rgb {
        Rgb {
            r: self.scale(color.r),
            g: self.scale(color.g),
            b: self.scale(color.b),
        }
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<f32> for Brightness {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}
