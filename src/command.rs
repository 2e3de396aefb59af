//! Pixel commands
//!
//! Lets other firmware tasks (time sync, buttons) request pixel changes
//! without owning the driver. Commands are drained once per scheduler tick.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::RainbowCycle;
use crate::channel::{Channel, Receiver, Sender};
use crate::color::Color;
use crate::driver::Pixels;
use crate::layout::{PixelLayout, ZoneId};
use crate::zones::set_layout_zone_color;

/// Requests that can be sent to the pixel scheduler
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelCommand {
    /// Set global brightness (clamped)
    SetBrightness(f32),
    /// Fill one zone with a solid color
    FillZone(ZoneId, Color),
    /// Fill every pixel with a solid color
    FillAll(Color),
    /// Turn every pixel off
    Clear,
    /// Start a rainbow with the given delay between frames
    StartRainbow(Duration),
    /// Stop the running animation, leaving the last frame on the pixels
    StopAnimation,
}

/// Change to the running animation requested by a batch of commands
#[derive(Debug, Clone)]
pub enum AnimationRequest {
    Start(RainbowCycle),
    Stop,
}

/// Type alias for command sender
pub type CommandSender<'a, const SIZE: usize> = Sender<'a, PixelCommand, SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a, const SIZE: usize> = Receiver<'a, PixelCommand, SIZE>;

/// Type alias for the command channel
pub type CommandChannel<const SIZE: usize> = Channel<PixelCommand, SIZE>;

/// Drains queued commands and applies them to the pixels
pub struct CommandProcessor<'a, const SIZE: usize> {
    commands: CommandReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> CommandProcessor<'a, SIZE> {
    pub const fn new(commands: CommandReceiver<'a, SIZE>) -> Self {
        Self { commands }
    }

    /// Process all pending commands (non-blocking)
    ///
    /// Drawing commands are applied right away. Animation changes are
    /// returned for the caller to apply; the last one in the batch wins.
    /// Drawing after an animation start cancels that animation.
    pub fn process_pending<P: Pixels + ?Sized>(
        &mut self,
        pixels: &mut P,
        layout: &PixelLayout,
    ) -> Option<AnimationRequest> {
        let mut request = None;

        while let Ok(command) = self.commands.try_receive() {
            #[cfg(feature = "esp32-log")]
            println!("[CommandProcessor] {:?}", command);
            match command {
                PixelCommand::SetBrightness(value) => {
                    pixels.set_brightness(value);
                }
                PixelCommand::FillZone(id, color) => {
                    set_layout_zone_color(pixels, layout, id, color);
                    request = Some(AnimationRequest::Stop);
                }
                PixelCommand::FillAll(color) => {
                    pixels.fill(color);
                    request = Some(AnimationRequest::Stop);
                }
                PixelCommand::Clear => {
                    pixels.clear();
                    request = Some(AnimationRequest::Stop);
                }
                PixelCommand::StartRainbow(wait) => {
                    request = Some(AnimationRequest::Start(RainbowCycle::new(wait)));
                }
                PixelCommand::StopAnimation => {
                    request = Some(AnimationRequest::Stop);
                }
            }
        }

        request
    }
}
