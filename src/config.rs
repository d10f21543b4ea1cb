//! Shine configuration.
//!
//! ```json
//! {
//!     "neopixel": { "gpio_pin": 18, "spi_interface": "/dev/spidev0.0" },
//!     "pulse_duration_ms": 1000
//! }
//! ```
//!
//! Every field is optional and falls back to its default.

use embassy_time::Duration;
use heapless::String;
use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::pulse::{DEFAULT_PULSE_DURATION, MAX_PULSE_DURATION, MIN_PULSE_DURATION};

pub const DEFAULT_GPIO_PIN: u8 = 18;
pub const DEFAULT_SPI_INTERFACE: &str = "/dev/spidev0.0";

/// NeoPixel wiring
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NeopixelConfig {
    /// Data pin for the native LED peripheral
    pub gpio_pin: Option<u8>,
    /// SPI device used when the native peripheral is missing
    pub spi_interface: String<64>,
}

impl Default for NeopixelConfig {
    fn default() -> Self {
        let mut spi_interface = String::new();
        // Fits the capacity
        let _ = spi_interface.push_str(DEFAULT_SPI_INTERFACE);
        Self {
            gpio_pin: Some(DEFAULT_GPIO_PIN),
            spi_interface,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShineConfig {
    pub neopixel: NeopixelConfig,
    /// Duration used by `pulse_default`
    pub pulse_duration_ms: u64,
}

impl Default for ShineConfig {
    fn default() -> Self {
        Self {
            neopixel: NeopixelConfig::default(),
            pulse_duration_ms: DEFAULT_PULSE_DURATION.as_millis(),
        }
    }
}

impl ShineConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &[u8]) -> Result<Self> {
        let (config, _) = serde_json_core::from_slice::<Self>(json).map_err(|_e| {
            #[cfg(feature = "log")]
            log::warn!("shine config: parse error: {:?}", _e);
            ConfigError::Parse
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.pulse_duration()?;
        Ok(())
    }

    /// Default pulse duration, range-checked before conversion
    pub fn pulse_duration(&self) -> Result<Duration> {
        let millis = self.pulse_duration_ms;
        if !(MIN_PULSE_DURATION.as_millis()..=MAX_PULSE_DURATION.as_millis()).contains(&millis) {
            return Err(ConfigError::PulseDuration(millis).into());
        }
        Ok(Duration::from_millis(millis))
    }
}
