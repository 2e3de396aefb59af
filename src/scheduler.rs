//! Frame scheduling for pixel animations.
//!
//! Portable pacing without async/await or platform-specific timers: the
//! scheduler tells the caller how long to sleep and the caller does it.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{Animation, AnimationStep, RainbowCycle};
use crate::command::{AnimationRequest, CommandProcessor, CommandReceiver};
use crate::driver::Pixels;
use crate::layout::PixelLayout;

/// Default delay between ticks while no animation is running
pub const DEFAULT_IDLE_INTERVAL: Duration = Duration::from_millis(50);

/// Configuration for the pixel scheduler
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    pub layout: PixelLayout,
    /// Delay between ticks while idle
    pub idle_interval: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            layout: PixelLayout::default(),
            idle_interval: DEFAULT_IDLE_INTERVAL,
        }
    }
}

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives queued commands and the running animation one frame at a time
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = PixelScheduler::new(driver, COMMANDS.receiver(), &config);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct PixelScheduler<'a, P: Pixels, const SIZE: usize> {
    pixels: P,
    commands: CommandProcessor<'a, SIZE>,
    layout: PixelLayout,
    animation: Option<RainbowCycle>,
    next_frame: Instant,
    idle_interval: Duration,
}

impl<'a, P: Pixels, const SIZE: usize> PixelScheduler<'a, P, SIZE> {
    pub fn new(pixels: P, commands: CommandReceiver<'a, SIZE>, config: &SchedulerConfig) -> Self {
        Self {
            pixels,
            commands: CommandProcessor::new(commands),
            layout: config.layout,
            animation: None,
            next_frame: Instant::from_millis(0),
            idle_interval: config.idle_interval,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// 1. Applies queued commands
    /// 2. Renders one frame of the running animation, if any
    /// 3. Returns the deadline for the next tick
    ///
    /// Falling more than two intervals behind resets the schedule to `now`
    /// instead of bursting through the backlog.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        if let Some(request) = self.commands.process_pending(&mut self.pixels, &self.layout) {
            match request {
                AnimationRequest::Start(animation) => self.start_animation(animation),
                AnimationRequest::Stop => self.stop_animation(),
            }
        }

        let step = self
            .animation
            .as_mut()
            .map(|animation| animation.step(&mut self.pixels));
        let interval = match step {
            Some(AnimationStep::Frame { wait }) => wait,
            Some(AnimationStep::Finished) => {
                self.animation = None;
                self.idle_interval
            }
            None => self.idle_interval,
        };

        let max_drift_ms = interval.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }
        self.next_frame += interval;

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: self.next_frame.saturating_duration_since(now),
        }
    }

    /// Replace the running animation
    pub fn start_animation(&mut self, mut animation: RainbowCycle) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[PixelScheduler] starting rainbow, {:?} frames",
            animation.total_steps()
        );
        animation.reset();
        self.animation = Some(animation);
    }

    /// Stop the running animation at the current frame
    pub fn stop_animation(&mut self) {
        #[cfg(feature = "esp32-log")]
        if self.animation.is_some() {
            println!("[PixelScheduler] stopping animation");
        }
        self.animation = None;
    }

    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Get the running animation
    pub const fn animation(&self) -> Option<&RainbowCycle> {
        self.animation.as_ref()
    }

    pub const fn layout(&self) -> &PixelLayout {
        &self.layout
    }

    /// Get a reference to the pixels.
    pub fn pixels(&self) -> &P {
        &self.pixels
    }

    /// Get a mutable reference to the pixels.
    pub fn pixels_mut(&mut self) -> &mut P {
        &mut self.pixels
    }
}
