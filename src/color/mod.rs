mod hex;
mod hsl;
mod names;
mod utils;

use smart_leds::RGB8;

pub use hex::{HexColor, parse_hex};
pub use hsl::{Hsl, hsl2rgb, rgb2hsl, with_lightness};
pub use names::{CSS_COLORS, ColorTable, CssColorTable};
pub use utils::{rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;
