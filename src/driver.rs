//! Pixel driver
//!
//! Owns the output bus, the staged frame, the brightness and the gamma
//! lookup. Every write to the physical pixels goes through here.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::brightness::Brightness;
use crate::color::{Color, Rgb};
use crate::gamma::{GammaCurve, GammaTable};

/// Pixel capability used by zone fills and animations
///
/// [`PixelDriver`] is the hardware implementation; anything that can stage
/// and flush colors (an in-memory buffer in tests, for instance) can stand
/// in for it.
pub trait Pixels {
    /// Number of addressable pixels
    fn pixel_count(&self) -> usize;

    /// Stage a color for a pixel without making it visible
    fn set_pixel(&mut self, index: usize, color: Color);

    /// Flush staged colors to the pixels
    fn show(&mut self);

    /// Set the global brightness
    fn set_brightness(&mut self, value: f32);

    /// Set every pixel to `color` and flush
    fn fill(&mut self, color: Color) {
        for index in 0..self.pixel_count() {
            self.set_pixel(index, color);
        }
        self.show();
    }

    /// Turn every pixel off and flush
    fn clear(&mut self) {
        self.fill(Color::BLACK);
    }
}

/// Error returned when a pixel index is past the end of the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub pixel_count: usize,
}

/// Configuration for the pixel driver
#[derive(Debug, Clone, Copy)]
pub struct PixelDriverConfig {
    /// Initial brightness, clamped like [`PixelDriver::set_brightness`]
    pub brightness: f32,
    pub gamma: GammaCurve,
}

/// Driver for an array of `N` pixels
pub struct PixelDriver<O: OutputDriver, const N: usize> {
    output: O,
    frame: [Rgb; N],
    brightness: Brightness,
    gamma: GammaTable,
}

impl<O: OutputDriver, const N: usize> PixelDriver<O, N> {
    /// Create a new driver
    ///
    /// Nothing is written to the bus until [`Self::init`] is called.
    pub fn new(output: O, config: &PixelDriverConfig) -> Self {
        Self {
            output,
            frame: [Rgb::default(); N],
            brightness: Brightness::new(config.brightness),
            gamma: GammaTable::new(config.gamma),
        }
    }

    /// Reset every pixel to an off state
    ///
    /// Call once before any other operation.
    pub fn init(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[PixelDriver.init] resetting {:?} pixels", N);
        self.frame = [Rgb::default(); N];
        self.output.write(&self.frame);
    }

    /// Set the global brightness
    ///
    /// Values outside `[Brightness::MIN, Brightness::MAX]` are clamped.
    pub fn set_brightness(&mut self, value: f32) {
        self.brightness = Brightness::new(value);
        #[cfg(feature = "esp32-log")]
        println!(
            "[PixelDriver.set_brightness] requested {:?}, using {:?}",
            value,
            self.brightness.value()
        );
    }

    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Stage a color for a pixel
    ///
    /// Channels are scaled by the brightness and then gamma corrected. The
    /// change is not visible until [`Self::show_pixels`]. Indices past the
    /// end of the array are ignored.
    pub fn set_pixel_color(&mut self, index: usize, color: Color) {
        let _ = self.try_set_pixel_color(index, color);
    }

    /// Stage a color for a pixel, reporting out-of-range indices
    pub fn try_set_pixel_color(&mut self, index: usize, color: Color) -> Result<(), IndexOutOfRange> {
        let corrected = self.correct(color);
        let pixel = self.frame.get_mut(index).ok_or(IndexOutOfRange {
            index,
            pixel_count: N,
        })?;
        *pixel = corrected;
        Ok(())
    }

    /// Turn every pixel off and flush
    pub fn clear_all_pixels(&mut self) {
        self.set_all_pixels(Color::BLACK);
    }

    /// Set every pixel to `color` and flush
    pub fn set_all_pixels(&mut self, color: Color) {
        let corrected = self.correct(color);
        self.frame = [corrected; N];
        self.show_pixels();
    }

    /// Make staged changes visible
    pub fn show_pixels(&mut self) {
        self.output.write(&self.frame);
    }

    /// Get the staged (corrected) color of a pixel
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.frame.get(index).copied()
    }

    /// Staged frame, as it will be sent on the next flush
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    /// Get a reference to the output bus
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output bus
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    fn correct(&self, color: Color) -> Rgb {
        let scaled = self.brightness.scale_rgb(color.to_rgb());
        self.gamma.correct_rgb(scaled)
    }
}

impl<O: OutputDriver, const N: usize> Pixels for PixelDriver<O, N> {
    fn pixel_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        self.set_pixel_color(index, color);
    }

    fn show(&mut self) {
        self.show_pixels();
    }

    fn set_brightness(&mut self, value: f32) {
        PixelDriver::set_brightness(self, value);
    }

    fn fill(&mut self, color: Color) {
        self.set_all_pixels(color);
    }
}
