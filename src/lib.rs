#![no_std]

pub mod animation;
pub mod brightness;
pub mod channel;
pub mod color;
pub mod command;
pub mod driver;
pub mod gamma;
pub mod layout;
pub mod output;
pub mod scheduler;
pub mod zones;

pub use animation::{Animation, AnimationStep, RainbowCycle, rainbow_cycle};
pub use brightness::Brightness;
pub use command::{CommandChannel, CommandReceiver, CommandSender, PixelCommand};
pub use driver::{IndexOutOfRange, PixelDriver, PixelDriverConfig, Pixels};
pub use gamma::{GammaCurve, GammaTable, gamma8};
pub use layout::{DEFAULT_LAYOUT, PixelLayout, Zone, ZoneId};
pub use output::SmartLedsOutput;
pub use scheduler::{FrameResult, PixelScheduler, SchedulerConfig};
pub use zones::{set_large_ring_color, set_small_ring_color, set_strip_color, set_zone_color};

pub use color::{Color, Rgb, create_color, wheel};
pub use embassy_time::{Duration, Instant};

/// Abstract LED bus trait
///
/// Implement this trait to support different hardware platforms.
/// The pixel driver is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
