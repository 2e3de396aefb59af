mod packed;
mod wheel;

use smart_leds::RGB8;

pub use packed::{Color, create_color, rgb_from_u32};
pub use wheel::wheel;

pub type Rgb = RGB8;
