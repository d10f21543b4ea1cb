//! LED output backends.
//!
//! A NeoPixel is driven either by the board's native LED peripheral or by the
//! SPI bitstream encoder. The choice is made once, when the backend is opened,
//! from the [`BoardProfile`], and never revisited afterwards.

mod common_anode;
mod native;
mod spi;

use embedded_hal::spi::SpiBus;
use smart_leds::SmartLedsWrite;

pub use common_anode::CommonAnodeLed;
pub use native::NativeLed;
pub use spi::SpiLed;

use crate::color::Rgb;
use crate::config::NeopixelConfig;
use crate::error::{ConfigError, Error, HardwareFault};
use crate::platform::BoardProfile;

/// Anything that can show a single color
pub trait LedOutput {
    /// Write `color` to the LED in one atomic transfer
    fn render(&mut self, color: Rgb) -> Result<(), HardwareFault>;

    /// Switch the LED off
    fn reset(&mut self) -> Result<(), HardwareFault> {
        self.render(Rgb::default())
    }
}

impl<T: LedOutput + ?Sized> LedOutput for &mut T {
    fn render(&mut self, color: Rgb) -> Result<(), HardwareFault> {
        (**self).render(color)
    }
}

/// Two LEDs showing the same color, rendered in order
impl<A: LedOutput, B: LedOutput> LedOutput for (A, B) {
    fn render(&mut self, color: Rgb) -> Result<(), HardwareFault> {
        self.0.render(color)?;
        self.1.render(color)
    }

    fn reset(&mut self) -> Result<(), HardwareFault> {
        self.0.reset()?;
        self.1.reset()
    }
}

/// Which NeoPixel backend a board must use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Dedicated PWM/DMA LED peripheral
    Native,
    /// SPI bus fed with duty-cycle encoded bytes
    Spi,
}

impl BackendKind {
    pub fn for_profile(profile: &BoardProfile) -> Self {
        if profile.supports_native_led_peripheral() {
            Self::Native
        } else {
            Self::Spi
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Spi => "spi",
        }
    }
}

/// Opens the hardware resources behind a NeoPixel.
///
/// Implementations hand out already configured handles: the SPI bus must be
/// clocked at 8x the LED bit rate (6.4 MHz for 800 kHz WS2812 parts).
pub trait HandleProvider {
    type Native: SmartLedsWrite<Color = Rgb>;
    type Spi: SpiBus<u8>;

    /// Open the native LED peripheral on `gpio_pin`
    fn open_native(
        &mut self,
        gpio_pin: u8,
        config: &NeopixelConfig,
    ) -> Result<Self::Native, Error>;

    /// Open the SPI bus named by `config.spi_interface`
    fn open_spi(&mut self, config: &NeopixelConfig) -> Result<Self::Spi, Error>;
}

/// NeoPixel backend selected for the running board
pub enum LedBackend<N, S> {
    Native(NativeLed<N>),
    Spi(SpiLed<S>),
}

impl<N, S> LedBackend<N, S>
where
    N: SmartLedsWrite<Color = Rgb>,
    S: SpiBus<u8>,
{
    /// Select and open the backend matching `profile`
    pub fn open<P>(
        profile: &BoardProfile,
        config: &NeopixelConfig,
        provider: &mut P,
    ) -> Result<Self, Error>
    where
        P: HandleProvider<Native = N, Spi = S>,
    {
        let kind = BackendKind::for_profile(profile);
        #[cfg(feature = "log")]
        log::debug!(
            "board \"{}\" uses the {} neopixel backend",
            profile.model(),
            kind.as_str()
        );
        match kind {
            BackendKind::Native => {
                let pin = config.gpio_pin.ok_or(ConfigError::MissingGpioPin)?;
                let driver = provider.open_native(pin, config)?;
                Ok(Self::Native(NativeLed::new(driver)))
            }
            BackendKind::Spi => {
                let bus = provider.open_spi(config)?;
                Ok(Self::Spi(SpiLed::new(bus)))
            }
        }
    }

    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::Native(_) => BackendKind::Native,
            Self::Spi(_) => BackendKind::Spi,
        }
    }
}

impl<N, S> LedOutput for LedBackend<N, S>
where
    N: SmartLedsWrite<Color = Rgb>,
    S: SpiBus<u8>,
{
    fn render(&mut self, color: Rgb) -> Result<(), HardwareFault> {
        let result = match self {
            Self::Native(led) => led.render(color),
            Self::Spi(led) => led.render(color),
        };
        #[cfg(feature = "log")]
        if let Err(fault) = &result {
            log::warn!("neopixel render failed: {}", fault);
        }
        result
    }
}
