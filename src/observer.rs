//! Render and pulse event hooks.

use embassy_time::Duration;

use crate::backend::BackendKind;
use crate::color::Rgb;
use crate::platform::BoardProfile;

/// Receives tracing events from [`crate::Shine`].
///
/// Every method defaults to doing nothing; `()` is the silent observer.
pub trait ShineObserver {
    fn on_backend_selected(&mut self, _kind: BackendKind, _profile: &BoardProfile) {}

    /// A color is about to be written to the LED
    fn on_render(&mut self, _color: Rgb) {}

    fn on_pulse_start(&mut self, _color: Rgb, _duration: Duration) {}

    /// Step `index` rendered, `delay` is the wait before the next one
    fn on_pulse_step(&mut self, _index: usize, _color: Rgb, _delay: Duration) {}
}

impl ShineObserver for () {}

impl<T: ShineObserver + ?Sized> ShineObserver for &mut T {
    fn on_backend_selected(&mut self, kind: BackendKind, profile: &BoardProfile) {
        (**self).on_backend_selected(kind, profile);
    }

    fn on_render(&mut self, color: Rgb) {
        (**self).on_render(color);
    }

    fn on_pulse_start(&mut self, color: Rgb, duration: Duration) {
        (**self).on_pulse_start(color, duration);
    }

    fn on_pulse_step(&mut self, index: usize, color: Rgb, delay: Duration) {
        (**self).on_pulse_step(index, color, delay);
    }
}

/// Forwards events to the `log` facade
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

#[cfg(feature = "log")]
impl ShineObserver for LogObserver {
    fn on_backend_selected(&mut self, kind: BackendKind, profile: &BoardProfile) {
        log::info!(
            "neopixel backend {} selected for \"{}\"",
            kind.as_str(),
            profile.model()
        );
    }

    fn on_render(&mut self, color: Rgb) {
        log::debug!(
            "rendering LED color {} (RGB: {} {} {})",
            crate::color::HexColor::from_rgb(color),
            color.r,
            color.g,
            color.b
        );
    }

    fn on_pulse_start(&mut self, color: Rgb, duration: Duration) {
        log::info!(
            "pulsing LED to {} over {}ms",
            crate::color::HexColor::from_rgb(color),
            duration.as_millis()
        );
    }

    fn on_pulse_step(&mut self, index: usize, color: Rgb, delay: Duration) {
        log::trace!(
            "pulse step {}: {:?}, next in {}us",
            index,
            color,
            delay.as_micros()
        );
    }
}
