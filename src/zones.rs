//! Solid fills for the clock face zones
//!
//! Each fill stages every pixel of the zone and flushes exactly once.

use crate::color::Color;
use crate::driver::Pixels;
use crate::layout::{PixelLayout, Zone, ZoneId};

/// Fill a zone with a solid color and flush
pub fn set_zone_color<P: Pixels + ?Sized>(pixels: &mut P, zone: Zone, color: Color) {
    for index in zone.indices() {
        pixels.set_pixel(index, color);
    }
    pixels.show();
}

/// Fill a zone of the layout by id and flush
pub fn set_layout_zone_color<P: Pixels + ?Sized>(
    pixels: &mut P,
    layout: &PixelLayout,
    id: ZoneId,
    color: Color,
) {
    set_zone_color(pixels, layout.zone(id), color);
}

/// Fill the 24 pixels of the large ring and flush
pub fn set_large_ring_color<P: Pixels + ?Sized>(pixels: &mut P, layout: &PixelLayout, color: Color) {
    set_zone_color(pixels, layout.large_ring(), color);
}

/// Fill the 12 pixels of the small ring and flush
pub fn set_small_ring_color<P: Pixels + ?Sized>(pixels: &mut P, layout: &PixelLayout, color: Color) {
    set_zone_color(pixels, layout.small_ring(), color);
}

/// Fill the 8 pixels of the strip and flush
pub fn set_strip_color<P: Pixels + ?Sized>(pixels: &mut P, layout: &PixelLayout, color: Color) {
    set_zone_color(pixels, layout.strip(), color);
}
