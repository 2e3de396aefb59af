use crate::color::{Color, create_color};

const SEGMENT: u8 = 85;

/// Map a wheel position to a hue
///
/// The wheel is split into three 85-step segments at 85 and 170. Inside
/// each segment one channel ramps down by 3 per step while the next one
/// ramps up, so walking 0..=255 produces a closed hue loop: green at 0,
/// red at 85, blue at 170 and back to green.
pub const fn wheel(position: u8) -> Color {
    if position < SEGMENT {
        let step = position * 3;
        create_color(step, 255 - step, 0)
    } else if position < SEGMENT * 2 {
        let step = (position - SEGMENT) * 3;
        create_color(255 - step, 0, step)
    } else {
        let step = (position - SEGMENT * 2) * 3;
        create_color(0, step, 255 - step)
    }
}
