#![allow(dead_code)]

use myrtio_pixel_rings::{
    Brightness, Color, GammaCurve, OutputDriver, PixelDriver, PixelDriverConfig, Pixels, Rgb,
    gamma8,
};

/// Output bus that keeps every written frame
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingOutput {
    pub fn writes(&self) -> usize {
        self.frames.len()
    }

    pub fn last(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl OutputDriver for RecordingOutput {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

/// In-memory pixels that count staged writes and flushes
#[derive(Debug)]
pub struct MemoryPixels<const N: usize> {
    pub colors: [Color; N],
    pub brightness: Option<f32>,
    /// Number of `set_pixel` calls staged before each `show`
    pub writes_per_show: Vec<usize>,
    pending: usize,
}

impl<const N: usize> MemoryPixels<N> {
    pub fn new() -> Self {
        Self {
            colors: [Color::BLACK; N],
            brightness: None,
            writes_per_show: Vec::new(),
            pending: 0,
        }
    }

    pub fn shows(&self) -> usize {
        self.writes_per_show.len()
    }
}

impl<const N: usize> Pixels for MemoryPixels<N> {
    fn pixel_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.colors.get_mut(index) {
            *pixel = color;
        }
        self.pending += 1;
    }

    fn show(&mut self) {
        self.writes_per_show.push(self.pending);
        self.pending = 0;
    }

    fn set_brightness(&mut self, value: f32) {
        self.brightness = Some(value);
    }
}

pub fn driver<const N: usize>(brightness: f32) -> PixelDriver<RecordingOutput, N> {
    PixelDriver::new(
        RecordingOutput::default(),
        &PixelDriverConfig {
            brightness,
            gamma: GammaCurve::Table,
        },
    )
}

/// Color as the driver stages it with the default gamma table
pub fn corrected(color: Color, brightness: f32) -> Rgb {
    let brightness = Brightness::new(brightness);
    Rgb::new(
        gamma8(brightness.scale(color.red())),
        gamma8(brightness.scale(color.green())),
        gamma8(brightness.scale(color.blue())),
    )
}
