//! Gamma correction
//!
//! WS2812 pixels respond linearly to PWM duty, while the eye does not. The
//! lookup table below maps a linear channel value to a perceptual one using
//! `255 * (v / 255) ^ (1 / 0.45)`.

use crate::color::Rgb;

/// Exponent used by [`GAMMA_TABLE`]
pub const DEFAULT_GAMMA_EXPONENT: f32 = 1.0 / 0.45;

/// Precomputed gamma lookup table
#[rustfmt::skip]
pub const GAMMA_TABLE: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6,
    6, 7, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 11, 11, 11,
    12, 12, 13, 13, 14, 14, 14, 15, 15, 16, 16, 17, 17, 18, 18, 19,
    19, 20, 20, 21, 22, 22, 23, 23, 24, 25, 25, 26, 26, 27, 28, 28,
    29, 30, 30, 31, 32, 33, 33, 34, 35, 35, 36, 37, 38, 39, 39, 40,
    41, 42, 43, 43, 44, 45, 46, 47, 48, 49, 50, 50, 51, 52, 53, 54,
    55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 71,
    72, 73, 74, 75, 76, 77, 78, 80, 81, 82, 83, 84, 86, 87, 88, 89,
    91, 92, 93, 94, 96, 97, 98, 100, 101, 102, 104, 105, 106, 108, 109, 110,
    112, 113, 115, 116, 118, 119, 121, 122, 123, 125, 126, 128, 130, 131, 133, 134,
    136, 137, 139, 140, 142, 144, 145, 147, 149, 150, 152, 154, 155, 157, 159, 160,
    162, 164, 166, 167, 169, 171, 173, 175, 176, 178, 180, 182, 184, 186, 187, 189,
    191, 193, 195, 197, 199, 201, 203, 205, 207, 209, 211, 213, 215, 217, 219, 221,
    223, 225, 227, 229, 231, 233, 235, 238, 240, 242, 244, 246, 248, 251, 253, 255,
];

/// Gamma correct a single channel using [`GAMMA_TABLE`]
#[inline]
pub const fn gamma8(value: u8) -> u8 {
    GAMMA_TABLE[value as usize]
}

/// Gamma curve selection
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GammaCurve {
    /// Fixed lookup table ([`GAMMA_TABLE`])
    #[default]
    Table,
    /// Table computed at startup from a custom exponent
    Equation(f32),
    /// No correction
    Linear,
}

/// Gamma lookup used by the pixel driver
#[derive(Debug, Clone)]
pub struct GammaTable {
    lut: [u8; 256],
}

impl GammaTable {
    /// Build a lookup table for the given curve
    pub fn new(curve: GammaCurve) -> Self {
        match curve {
            GammaCurve::Table => Self { lut: GAMMA_TABLE },
            GammaCurve::Equation(exponent) => Self::from_exponent(exponent),
            GammaCurve::Linear => Self::linear(),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn linear() -> Self {
        let mut lut = [0; 256];
        for (i, value) in lut.iter_mut().enumerate() {
            *value = i as u8;
        }
        Self { lut }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn from_exponent(exponent: f32) -> Self {
        if !exponent.is_finite() || exponent <= 0.0 {
            return Self::linear();
        }
        let mut lut = [0; 256];
        for (i, value) in lut.iter_mut().enumerate() {
            let unit = i as f32 / 255.0;
            *value = (libm::powf(unit, exponent) * 255.0 + 0.5) as u8;
        }
        Self { lut }
    }

    /// Correct a single channel
    #[inline]
    pub const fn correct(&self, value: u8) -> u8 {
        self.lut[value as usize]
    }

    /// Correct every channel of a color
    #[inline]
    pub const fn correct_rgb(&self, color: Rgb) -> Rgb {
        Rgb {
            r: self.correct(color.r),
            g: self.correct(color.g),
            b: self.correct(color.b),
        }
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::new(GammaCurve::default())
    }
}
