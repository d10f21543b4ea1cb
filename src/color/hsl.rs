use libm::{fabsf, fmodf, roundf};

use crate::color::Rgb;

/// HSL color with hue in degrees (0-360) and saturation/lightness in 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub sat: f32,
    pub light: f32,
}

/// Convert RGB to HSL
pub fn rgb2hsl(rgb: Rgb) -> Hsl {
    let r = f32::from(rgb.r) / 255.0;
    let g = f32::from(rgb.g) / 255.0;
    let b = f32::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let light = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return Hsl {
            hue: 0.0,
            sat: 0.0,
            light,
        };
    }

    let sat = if light > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    #[allow(clippy::float_cmp)]
    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl {
        hue: sector * 60.0,
        sat,
        light,
    }
}

/// Convert HSL to RGB, rounding each channel to the nearest integer
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsl2rgb(hsl: Hsl) -> Rgb {
    let hue = fmodf(hsl.hue, 360.0);
    let sat = hsl.sat.clamp(0.0, 1.0);
    let light = hsl.light.clamp(0.0, 1.0);

    let chroma = (1.0 - fabsf(2.0 * light - 1.0)) * sat;
    let x = chroma * (1.0 - fabsf(fmodf(hue / 60.0, 2.0) - 1.0));
    let m = light - chroma / 2.0;

    let (r, g, b) = match hue {
        h if h < 60.0 => (chroma, x, 0.0),
        h if h < 120.0 => (x, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, x),
        h if h < 240.0 => (0.0, x, chroma),
        h if h < 300.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let channel = |value: f32| roundf(((value + m) * 255.0).clamp(0.0, 255.0)) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

/// Replace the lightness of `color`, keeping hue and saturation
pub fn with_lightness(color: Rgb, light: f32) -> Rgb {
    hsl2rgb(Hsl {
        light,
        ..rgb2hsl(color)
    })
}
