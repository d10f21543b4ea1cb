use core::fmt;

use heapless::String;

use crate::color::{Rgb, rgb_from_u32, rgb_to_u32};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Canonical `#RRGGBB` representation, upper-case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor(String<7>);

impl HexColor {
    pub fn from_rgb(color: Rgb) -> Self {
        let value = rgb_to_u32(color);
        let mut text = String::new();
        // Capacity is exactly 7, pushes cannot fail
        let _ = text.push('#');
        for shift in (0..6).rev() {
            let nibble = (value >> (shift * 4)) & 0xF;
            let _ = text.push(char::from(HEX_DIGITS[nibble as usize]));
        }
        Self(text)
    }

    /// Full form, including the `#` prefix
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The six hex digits without prefix
    pub fn digits(&self) -> &str {
        &self.0.as_str()[1..]
    }

    pub fn rgb(&self) -> Rgb {
        // Constructed only from a valid Rgb
        rgb_from_u32(u32::from_str_radix(self.digits(), 16).unwrap_or(0))
    }
}

impl From<Rgb> for HexColor {
    fn from(color: Rgb) -> Self {
        Self::from_rgb(color)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse bare `RRGGBB` or `RGB` hex digits.
///
/// The 3-digit shorthand expands each digit, so `F08` becomes `FF0088`.
/// Prefixes are not accepted here.
pub fn parse_hex(digits: &str) -> Option<Rgb> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    match digits.len() {
        6 => Some(rgb_from_u32(value)),
        3 => {
            let expand = |nibble: u32| ((nibble & 0xF) * 0x11) as u8;
            Some(Rgb::new(
                expand(value >> 8),
                expand(value >> 4),
                expand(value),
            ))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_formats_upper_case() {
        let hex = HexColor::from_rgb(Rgb::new(0xAB, 0x0C, 0xFF));
        assert_eq!(hex.as_str(), "#AB0CFF");
        assert_eq!(hex.digits(), "AB0CFF");
        assert_eq!(hex.rgb(), Rgb::new(0xAB, 0x0C, 0xFF));
    }

    #[test]
    fn test_parse_hex_rejects_signs_and_lengths() {
        assert_eq!(parse_hex("+FFFFF"), None);
        assert_eq!(parse_hex("FFFF"), None);
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("abc"), Some(Rgb::new(0xAA, 0xBB, 0xCC)));
    }
}
