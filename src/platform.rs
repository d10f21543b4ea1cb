//! Board identification.
//!
//! Decides once, at startup, whether the host still has the legacy PWM/DMA
//! peripheral that drives WS2812 LEDs natively, or whether the LED has to be
//! fed through the SPI bitstream encoder instead.

use heapless::String;

/// Identification source on Raspberry Pi boards
pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Board revision that dropped the legacy LED PWM peripheral
const SPI_ONLY_MODEL_PREFIX: &str = "Raspberry Pi 5";

const MODEL_CAPACITY: usize = 64;

/// Immutable description of the host board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardProfile {
    model: String<MODEL_CAPACITY>,
}

impl BoardProfile {
    /// Profile used when the host could not be identified
    pub const fn unknown() -> Self {
        Self {
            model: String::new(),
        }
    }

    /// Build a profile from a model string, truncating overly long text
    pub fn from_model(model: &str) -> Self {
        let mut kept = String::new();
        for ch in model.chars() {
            if kept.push(ch).is_err() {
                break;
            }
        }
        Self { model: kept }
    }

    /// Parse `/proc/cpuinfo` contents.
    ///
    /// The model is the value of the first line starting with `Model`.
    pub fn from_cpuinfo(cpuinfo: &str) -> Self {
        cpuinfo
            .lines()
            .find(|line| line.starts_with("Model"))
            .and_then(|line| line.split(':').nth(1))
            .map(|value| Self::from_model(value.trim()))
            .unwrap_or_default()
    }

    pub fn model(&self) -> &str {
        self.model.as_str()
    }

    pub fn is_unknown(&self) -> bool {
        self.model.is_empty()
    }

    /// Whether the board still exposes the native LED peripheral
    pub fn supports_native_led_peripheral(&self) -> bool {
        !self.model.starts_with(SPI_ONLY_MODEL_PREFIX)
    }
}

/// Read the running board's profile.
///
/// Falls back to [`BoardProfile::unknown`] when the identification source is
/// unavailable, e.g. when not running on a Raspberry Pi.
#[cfg(feature = "std")]
pub fn identify() -> BoardProfile {
    match std::fs::read_to_string(CPUINFO_PATH) {
        Ok(cpuinfo) => BoardProfile::from_cpuinfo(&cpuinfo),
        Err(_err) => {
            #[cfg(feature = "log")]
            log::debug!("cannot read {}: {}", CPUINFO_PATH, _err);
            BoardProfile::unknown()
        }
    }
}
