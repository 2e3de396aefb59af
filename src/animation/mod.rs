//! Steppable animations
//!
//! An animation renders one frame per [`Animation::step`] call and tells
//! the caller how long to wait before the next one. The caller owns the
//! loop, so it can interleave other work or drop the animation at any
//! frame boundary.

mod rainbow;

use embassy_time::Duration;

pub use rainbow::{RAINBOW_CYCLES, RainbowCycle, rainbow_cycle, rainbow_frame};

use crate::driver::Pixels;

/// Outcome of a single animation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// A frame was rendered and flushed; wait before stepping again
    Frame { wait: Duration },
    /// Nothing left to render
    Finished,
}

pub trait Animation {
    /// Render and flush the next frame
    fn step<P: Pixels + ?Sized>(&mut self, pixels: &mut P) -> AnimationStep;

    /// Rewind to the first frame
    fn reset(&mut self) {}

    /// Check if every frame has been rendered
    fn is_finished(&self) -> bool {
        false
    }
}
