//! Traveling rainbow
//!
//! Spreads one full turn of the color wheel over the pixel array and
//! rotates it by one wheel position per frame.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Animation, AnimationStep};
use crate::color::wheel;
use crate::driver::Pixels;

/// Number of full wheel turns in one run
pub const RAINBOW_CYCLES: u16 = 3;

const WHEEL_POSITIONS: usize = 256;

/// Stage one rainbow frame, rotated by `offset` wheel positions
///
/// Pixel `i` gets wheel position `(i * 256 / count + offset) & 255`.
/// Nothing is flushed.
#[allow(clippy::cast_possible_truncation)]
pub fn rainbow_frame<P: Pixels + ?Sized>(pixels: &mut P, offset: u16) {
    let count = pixels.pixel_count();
    if count == 0 {
        return;
    }
    for index in 0..count {
        let position = (index * WHEEL_POSITIONS / count + usize::from(offset)) & 0xFF;
        pixels.set_pixel(index, wheel(position as u8));
    }
}

/// Rainbow animation, one wheel position per step
#[derive(Debug, Clone)]
pub struct RainbowCycle {
    /// Delay between frames
    wait: Duration,
    /// Number of full wheel turns
    cycles: u16,
    /// Next frame to render
    step: u32,
}

impl RainbowCycle {
    /// Create a rainbow running [`RAINBOW_CYCLES`] turns
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            cycles: RAINBOW_CYCLES,
            step: 0,
        }
    }

    /// Set the number of full wheel turns
    #[must_use]
    pub const fn with_cycles(mut self, cycles: u16) -> Self {
        self.cycles = cycles;
        self
    }

    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Total number of frames in one run
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn total_steps(&self) -> u32 {
        self.cycles as u32 * WHEEL_POSITIONS as u32
    }

    /// Number of frames already rendered
    pub const fn current_step(&self) -> u32 {
        self.step
    }
}

impl Animation for RainbowCycle {
    #[allow(clippy::cast_possible_truncation)]
    fn step<P: Pixels + ?Sized>(&mut self, pixels: &mut P) -> AnimationStep {
        if self.is_finished() {
            return AnimationStep::Finished;
        }

        // Only the low byte matters for the wheel position
        rainbow_frame(pixels, (self.step & 0xFF) as u16);
        pixels.show();
        self.step += 1;

        AnimationStep::Frame { wait: self.wait }
    }

    fn reset(&mut self) {
        self.step = 0;
    }

    fn is_finished(&self) -> bool {
        self.step >= self.total_steps()
    }
}

/// Run a full rainbow, blocking until the last frame
///
/// Waits `wait_ms` milliseconds after every frame. Use [`RainbowCycle`]
/// directly when the caller has other work to do in between.
#[allow(clippy::cast_possible_truncation)]
pub fn rainbow_cycle<P, D>(pixels: &mut P, wait_ms: u8, delay: &mut D)
where
    P: Pixels + ?Sized,
    D: DelayNs,
{
    let mut animation = RainbowCycle::new(Duration::from_millis(u64::from(wait_ms)));
    #[cfg(feature = "esp32-log")]
    println!(
        "[rainbow_cycle] running {:?} frames, {:?} ms apart",
        animation.total_steps(),
        wait_ms
    );
    while let AnimationStep::Frame { wait } = animation.step(pixels) {
        delay.delay_ms(wait.as_millis() as u32);
    }
}
