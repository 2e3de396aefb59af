//! Output bus adapters

use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::Rgb;

/// Output driver backed by any [`SmartLedsWrite`] device
///
/// Works with the usual WS2812 backends (SPI, RMT, PIO). Bus errors are
/// dropped: a failed frame is simply replaced by the next one.
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the underlying writer
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the adapter and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        let _ = self.writer.write(colors.iter().copied());
    }
}
