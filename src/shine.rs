//! Caller-facing LED controller.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiBus;
use smart_leds::SmartLedsWrite;

use crate::backend::{BackendKind, HandleProvider, LedBackend, LedOutput};
use crate::color::{ColorTable, CssColorTable, HexColor, Rgb};
use crate::config::ShineConfig;
use crate::error::Result;
use crate::normalizer::ColorNormalizer;
use crate::observer::ShineObserver;
use crate::platform::BoardProfile;
use crate::pulse::{DEFAULT_PULSE_DURATION, PulsePlan, check_duration};

/// Shows colors and pulses on a single LED.
///
/// Owns the LED exclusively: renders and pulses are serialized by `&mut self`.
/// Wrap the whole controller in a mutex to share it between threads.
pub struct Shine<O, D, T: ColorTable = CssColorTable, Obs = ()> {
    output: O,
    delay: D,
    normalizer: ColorNormalizer<T>,
    observer: Obs,
    default_pulse: Duration,
}

impl<O: LedOutput, D: DelayNs> Shine<O, D> {
    /// Controller with CSS named colors and no observer
    pub const fn new(output: O, delay: D, seed: u32) -> Self {
        Self {
            output,
            delay,
            normalizer: ColorNormalizer::new(seed),
            observer: (),
            default_pulse: DEFAULT_PULSE_DURATION,
        }
    }
}

impl<N, S, D, Obs> Shine<LedBackend<N, S>, D, CssColorTable, Obs>
where
    N: SmartLedsWrite<Color = Rgb>,
    S: SpiBus<u8>,
    D: DelayNs,
    Obs: ShineObserver,
{
    /// Open the NeoPixel backend matching `profile` and wrap it
    pub fn from_config<P: HandleProvider<Native = N, Spi = S>>(
        config: &ShineConfig,
        profile: &BoardProfile,
        provider: &mut P,
        delay: D,
        seed: u32,
        mut observer: Obs,
    ) -> Result<Self> {
        let default_pulse = config.pulse_duration()?;
        let backend = LedBackend::open(profile, &config.neopixel, provider)?;
        observer.on_backend_selected(backend.kind(), profile);
        Ok(Self {
            output: backend,
            delay,
            normalizer: ColorNormalizer::new(seed),
            observer,
            default_pulse,
        })
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.output.kind()
    }
}

#[cfg(feature = "std")]
impl<N, S, Obs> Shine<LedBackend<N, S>, embassy_time::Delay, CssColorTable, Obs>
where
    N: SmartLedsWrite<Color = Rgb>,
    S: SpiBus<u8>,
    Obs: ShineObserver,
{
    /// Identify the running board and open its NeoPixel.
    ///
    /// Sleeps with `embassy_time::Delay` and seeds the random color picker
    /// from the system clock.
    pub fn open_host<P: HandleProvider<Native = N, Spi = S>>(
        config: &ShineConfig,
        provider: &mut P,
        observer: Obs,
    ) -> Result<Self> {
        let profile = crate::platform::identify();
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos())
            .unwrap_or(1);
        Self::from_config(
            config,
            &profile,
            provider,
            embassy_time::Delay,
            seed,
            observer,
        )
    }
}

impl<O, D, T, Obs> Shine<O, D, T, Obs>
where
    O: LedOutput,
    D: DelayNs,
    T: ColorTable,
    Obs: ShineObserver,
{
    /// Replace the named color table
    pub fn with_normalizer<U: ColorTable>(
        self,
        normalizer: ColorNormalizer<U>,
    ) -> Shine<O, D, U, Obs> {
        Shine {
            output: self.output,
            delay: self.delay,
            normalizer,
            observer: self.observer,
            default_pulse: self.default_pulse,
        }
    }

    pub fn with_observer<P: ShineObserver>(self, observer: P) -> Shine<O, D, T, P> {
        Shine {
            output: self.output,
            delay: self.delay,
            normalizer: self.normalizer,
            observer,
            default_pulse: self.default_pulse,
        }
    }

    /// Set the duration used by [`Shine::pulse_default`]
    pub fn with_default_pulse(mut self, duration: Duration) -> Result<Self> {
        check_duration(duration)?;
        self.default_pulse = duration;
        Ok(self)
    }

    /// Show `color`; `None` switches the LED off.
    ///
    /// Returns the canonical color that was written.
    pub fn render(&mut self, color: Option<&str>) -> Result<HexColor> {
        let hex = self.normalizer.normalize(color)?;
        self.render_rgb(hex.rgb())?;
        Ok(hex)
    }

    /// Show an already resolved color
    pub fn render_rgb(&mut self, color: Rgb) -> Result<()> {
        self.observer.on_render(color);
        self.output.render(color)?;
        Ok(())
    }

    /// Pulse `color` once over `duration` (0.5 to 2 seconds).
    ///
    /// The duration is checked before the color, and both before the LED is
    /// touched.
    pub fn pulse(&mut self, color: &str, duration: Duration) -> Result<()> {
        check_duration(duration)?;
        let rgb = self.normalizer.normalize_rgb(Some(color))?;
        let plan = PulsePlan::new(rgb, duration)?;
        #[cfg(feature = "log")]
        log::info!("pulsing LED to RGB color {}", HexColor::from_rgb(rgb));
        plan.play(&mut self.output, &mut self.delay, &mut self.observer)
    }

    /// Pulse with the configured default duration
    pub fn pulse_default(&mut self, color: &str) -> Result<()> {
        self.pulse(color, self.default_pulse)
    }

    /// Switch the LED off
    pub fn off(&mut self) -> Result<()> {
        self.observer.on_render(Rgb::default());
        self.output.reset()?;
        Ok(())
    }

    /// Every named color accepted by `render` and `pulse`
    pub fn shine_colors(&self) -> impl Iterator<Item = &str> {
        self.normalizer.shine_colors()
    }

    pub fn random_color(&mut self) -> Option<&str> {
        self.normalizer.random_color()
    }

    pub const fn default_pulse(&self) -> Duration {
        self.default_pulse
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn observer(&self) -> &Obs {
        &self.observer
    }

    /// Release the LED handle
    pub fn into_output(self) -> O {
        self.output
    }
}
