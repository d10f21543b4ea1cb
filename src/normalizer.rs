//! Color specification normalization.
//!
//! Accepted inputs, first match wins:
//! - missing input, treated as `off`
//! - the keywords `on`, `off` and `random`
//! - hex digits in `RRGGBB` or `RGB` form, optionally prefixed by `0x`, `#` or both
//! - a name known to the [`ColorTable`]

use crate::color::{ColorTable, CssColorTable, HexColor, Rgb, parse_hex};
use crate::error::InvalidColor;

pub const KEYWORD_ON: &str = "on";
pub const KEYWORD_OFF: &str = "off";
pub const KEYWORD_RANDOM: &str = "random";

/// Simple xorshift32 PRNG used to pick random named colors
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub const fn new(seed: u32) -> Self {
        // Zero state would produce only zeros
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform index in `0..bound`; `bound` must be non-zero
    #[allow(clippy::cast_possible_truncation)]
    pub fn below(&mut self, bound: usize) -> usize {
        ((u64::from(self.next_u32()) * bound as u64) >> 32) as usize
    }
}

/// Resolves heterogeneous color specifications to canonical `#RRGGBB`
#[derive(Debug, Clone)]
pub struct ColorNormalizer<T: ColorTable = CssColorTable> {
    table: T,
    rng: Xorshift32,
}

impl ColorNormalizer<CssColorTable> {
    /// Normalizer backed by the CSS named colors
    pub const fn new(seed: u32) -> Self {
        Self::with_table(CssColorTable, seed)
    }
}

impl<T: ColorTable> ColorNormalizer<T> {
    pub const fn with_table(table: T, seed: u32) -> Self {
        Self {
            table,
            rng: Xorshift32::new(seed),
        }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Every named color this normalizer recognizes
    pub fn shine_colors(&self) -> impl Iterator<Item = &str> {
        (0..self.table.len()).filter_map(|index| self.table.name_at(index))
    }

    /// Uniformly chosen named color, `None` when the table is empty
    pub fn random_color(&mut self) -> Option<&str> {
        if self.table.is_empty() {
            return None;
        }
        let index = self.rng.below(self.table.len());
        self.table.name_at(index)
    }

    /// Resolve `input` to a canonical color
    pub fn normalize(&mut self, input: Option<&str>) -> Result<HexColor, InvalidColor> {
        let spec = input.unwrap_or(KEYWORD_OFF);
        match spec {
            KEYWORD_ON => Ok(HexColor::from_rgb(Rgb::new(0xFF, 0xFF, 0xFF))),
            KEYWORD_OFF => Ok(HexColor::from_rgb(Rgb::new(0, 0, 0))),
            KEYWORD_RANDOM => {
                if self.table.is_empty() {
                    return Err(InvalidColor::new(spec));
                }
                let index = self.rng.below(self.table.len());
                let name = self
                    .table
                    .name_at(index)
                    .ok_or_else(|| InvalidColor::new(spec))?;
                self.resolve(name).ok_or_else(|| InvalidColor::new(spec))
            }
            _ => self.resolve(spec).ok_or_else(|| InvalidColor::new(spec)),
        }
    }

    /// Resolve `input` straight to channel values
    pub fn normalize_rgb(&mut self, input: Option<&str>) -> Result<Rgb, InvalidColor> {
        self.normalize(input).map(|hex| hex.rgb())
    }

    fn resolve(&self, spec: &str) -> Option<HexColor> {
        let digits = spec.strip_prefix("0x").unwrap_or(spec);
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if let Some(color) = parse_hex(digits) {
            return Some(HexColor::from_rgb(color));
        }

        let value = self.table.lookup(digits)?;
        let value = value.strip_prefix('#').unwrap_or(value);
        if value.len() != 6 {
            return None;
        }
        parse_hex(value).map(HexColor::from_rgb)
    }
}
