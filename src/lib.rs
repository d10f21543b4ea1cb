#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod backend;
pub mod bitstream;
pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod normalizer;
pub mod observer;
pub mod platform;
pub mod pulse;
pub mod shine;

pub use backend::{
    BackendKind, CommonAnodeLed, HandleProvider, LedBackend, LedOutput, NativeLed, SpiLed,
};
pub use bitstream::{Bitstream, encode_byte, encode_color};
pub use config::{NeopixelConfig, ShineConfig};
pub use error::{ConfigError, Error, HardwareFault, InvalidColor, Result};
pub use normalizer::ColorNormalizer;
#[cfg(feature = "log")]
pub use observer::LogObserver;
pub use observer::ShineObserver;
#[cfg(feature = "std")]
pub use platform::identify;
pub use platform::BoardProfile;
pub use pulse::{PulsePlan, PulseStep};
pub use shine::Shine;

pub use color::{ColorTable, CssColorTable, HexColor, Hsl, Rgb};
pub use embassy_time::Duration;
