use embedded_hal::spi::{Error as _, SpiBus};

use super::LedOutput;
use crate::bitstream::{Bitstream, encode_color};
use crate::color::Rgb;
use crate::error::HardwareFault;

/// NeoPixel fed through an SPI bus.
///
/// Every render is a single 24-byte write of the encoded pixel. The bus
/// clock must already be set to 8x the LED bit rate.
pub struct SpiLed<S> {
    bus: S,
}

impl<S: SpiBus<u8>> SpiLed<S> {
    pub const fn new(bus: S) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &S {
        &self.bus
    }

    pub fn into_inner(self) -> S {
        self.bus
    }

    fn transfer(&mut self, stream: &Bitstream) -> Result<(), S::Error> {
        self.bus.write(stream)?;
        self.bus.flush()
    }
}

impl<S: SpiBus<u8>> LedOutput for SpiLed<S> {
    fn render(&mut self, color: Rgb) -> Result<(), HardwareFault> {
        let stream = encode_color(color);
        #[cfg(feature = "log")]
        log::trace!("spi render {:?} as {:02X?}", color, stream);
        self.transfer(&stream)
            .map_err(|err| HardwareFault::Spi(err.kind()))
    }
}
