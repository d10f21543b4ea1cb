//! Error types shared by every rendering path.

use core::fmt;

use embassy_time::Duration;
use embedded_hal::{pwm, spi};
use heapless::String;

/// Maximum number of input bytes kept in [`InvalidColor`].
pub const RAW_COLOR_CAPACITY: usize = 32;

pub type Result<T> = core::result::Result<T, Error>;

/// Color specification that could not be resolved to `#RRGGBB`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColor {
    /// Offending input, truncated to [`RAW_COLOR_CAPACITY`] bytes
    pub raw: String<RAW_COLOR_CAPACITY>,
}

impl InvalidColor {
    pub fn new(raw: &str) -> Self {
        let mut kept = String::new();
        for ch in raw.chars() {
            if kept.push(ch).is_err() {
                break;
            }
        }
        Self { raw: kept }
    }
}

/// Failure reported by the bus or driver behind an LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareFault {
    Spi(spi::ErrorKind),
    Pwm(pwm::ErrorKind),
    /// Native LED peripheral driver rejected the write
    Driver,
}

/// Configuration problems detected before any hardware is touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Document is not valid JSON for [`crate::ShineConfig`]
    Parse,
    /// Native peripheral requested without a data pin
    MissingGpioPin,
    /// Default pulse duration in milliseconds lies outside the accepted range
    PulseDuration(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidColor(InvalidColor),
    InvalidDuration(Duration),
    HardwareIo(HardwareFault),
    Config(ConfigError),
}

impl From<InvalidColor> for Error {
    fn from(err: InvalidColor) -> Self {
        Self::InvalidColor(err)
    }
}

impl From<HardwareFault> for Error {
    fn from(fault: HardwareFault) -> Self {
        Self::HardwareIo(fault)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl fmt::Display for HardwareFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spi(kind) => write!(f, "spi transfer failed: {kind}"),
            Self::Pwm(kind) => write!(f, "pwm write failed: {kind}"),
            Self::Driver => f.write_str("led driver write failed"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => f.write_str("malformed configuration"),
            Self::MissingGpioPin => f.write_str("gpio pin is not configured for the native led"),
            Self::PulseDuration(millis) => {
                write!(f, "default pulse duration {millis}ms is out of range")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(err) => write!(f, "unrecognized color \"{}\"", err.raw),
            Self::InvalidDuration(duration) => write!(
                f,
                "pulse duration {}ms is outside 500..=2000ms",
                duration.as_millis()
            ),
            Self::HardwareIo(fault) => write!(f, "hardware i/o error: {fault}"),
            Self::Config(err) => write!(f, "configuration error: {err}"),
        }
    }
}

impl core::error::Error for Error {}
