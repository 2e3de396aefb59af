//! Pixel array layout
//!
//! The clock face is one daisy-chained pixel array split into three
//! contiguous zones: a large ring, a small ring and a short linear strip.
//! Zone sizes are fixed by the hardware; only their offsets depend on how
//! the board is wired.

use core::ops::Range;

/// Number of pixels in the large ring
pub const LARGE_RING_LEN: u16 = 24;
/// Number of pixels in the small ring
pub const SMALL_RING_LEN: u16 = 12;
/// Number of pixels in the strip
pub const STRIP_LEN: u16 = 8;

/// Pixel count of [`DEFAULT_LAYOUT`]
pub const DEFAULT_PIXEL_COUNT: usize = (LARGE_RING_LEN + SMALL_RING_LEN + STRIP_LEN) as usize;

/// Large ring first, then the small ring, then the strip
pub const DEFAULT_LAYOUT: PixelLayout =
    PixelLayout::new(0, LARGE_RING_LEN, LARGE_RING_LEN + SMALL_RING_LEN);

const ZONE_NAME_LARGE_RING: &str = "large_ring";
const ZONE_NAME_SMALL_RING: &str = "small_ring";
const ZONE_NAME_STRIP: &str = "strip";

const ZONE_ID_LARGE_RING: u8 = 0;
const ZONE_ID_SMALL_RING: u8 = 1;
const ZONE_ID_STRIP: u8 = 2;

/// Contiguous range of pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub offset: u16,
    pub len: u16,
}

impl Zone {
    pub const fn new(offset: u16, len: u16) -> Self {
        Self { offset, len }
    }

    /// Index one past the last pixel of the zone
    pub const fn end(self) -> usize {
        self.offset as usize + self.len as usize
    }

    /// Pixel indices covered by the zone
    pub const fn indices(self) -> Range<usize> {
        self.offset as usize..self.end()
    }

    pub const fn contains(self, index: usize) -> bool {
        index >= self.offset as usize && index < self.end()
    }
}

/// Known zones of the pixel array
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ZoneId {
    LargeRing = ZONE_ID_LARGE_RING,
    SmallRing = ZONE_ID_SMALL_RING,
    Strip = ZONE_ID_STRIP,
}

impl ZoneId {
    pub const ALL: [Self; 3] = [Self::LargeRing, Self::SmallRing, Self::Strip];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ZONE_ID_LARGE_RING => Self::LargeRing,
            ZONE_ID_SMALL_RING => Self::SmallRing,
            ZONE_ID_STRIP => Self::Strip,
            _ => return None,
        })
    }

    /// Number of pixels in the zone
    pub const fn pixel_count(self) -> u16 {
        match self {
            Self::LargeRing => LARGE_RING_LEN,
            Self::SmallRing => SMALL_RING_LEN,
            Self::Strip => STRIP_LEN,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LargeRing => ZONE_NAME_LARGE_RING,
            Self::SmallRing => ZONE_NAME_SMALL_RING,
            Self::Strip => ZONE_NAME_STRIP,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ZONE_NAME_LARGE_RING => Some(Self::LargeRing),
            ZONE_NAME_SMALL_RING => Some(Self::SmallRing),
            ZONE_NAME_STRIP => Some(Self::Strip),
            _ => None,
        }
    }
}

/// Error returned when a zone does not fit into the pixel array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneOutOfRange {
    pub zone: ZoneId,
    pub end: usize,
    pub pixel_count: usize,
}

/// Zone offsets of the pixel array
///
/// Zone lengths are fixed, see [`ZoneId::pixel_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    pub large_ring_offset: u16,
    pub small_ring_offset: u16,
    pub strip_offset: u16,
}

impl PixelLayout {
    pub const fn new(large_ring_offset: u16, small_ring_offset: u16, strip_offset: u16) -> Self {
        Self {
            large_ring_offset,
            small_ring_offset,
            strip_offset,
        }
    }

    /// Get the pixel range of a zone
    pub const fn zone(&self, id: ZoneId) -> Zone {
        let offset = match id {
            ZoneId::LargeRing => self.large_ring_offset,
            ZoneId::SmallRing => self.small_ring_offset,
            ZoneId::Strip => self.strip_offset,
        };
        Zone::new(offset, id.pixel_count())
    }

    pub const fn large_ring(&self) -> Zone {
        self.zone(ZoneId::LargeRing)
    }

    pub const fn small_ring(&self) -> Zone {
        self.zone(ZoneId::SmallRing)
    }

    pub const fn strip(&self) -> Zone {
        self.zone(ZoneId::Strip)
    }

    /// Check that every zone fits into an array of `pixel_count` pixels
    pub fn check(&self, pixel_count: usize) -> Result<(), ZoneOutOfRange> {
        for id in ZoneId::ALL {
            let end = self.zone(id).end();
            if end > pixel_count {
                return Err(ZoneOutOfRange {
                    zone: id,
                    end,
                    pixel_count,
                });
            }
        }
        Ok(())
    }
}

impl Default for PixelLayout {
    fn default() -> Self {
        DEFAULT_LAYOUT
    }
}
