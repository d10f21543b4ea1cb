use core::iter;

use smart_leds::SmartLedsWrite;

use super::LedOutput;
use crate::color::Rgb;
use crate::error::HardwareFault;

/// NeoPixel driven by a dedicated LED peripheral driver.
///
/// The driver owns the protocol timing; this wrapper only hands it the
/// 24-bit color of the single pixel.
pub struct NativeLed<D> {
    driver: D,
}

impl<D> NativeLed<D>
where
    D: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(driver: D) -> Self {
        Self { driver }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_inner(self) -> D {
        self.driver
    }
}

impl<D> LedOutput for NativeLed<D>
where
    D: SmartLedsWrite<Color = Rgb>,
{
    fn render(&mut self, color: Rgb) -> Result<(), HardwareFault> {
        #[cfg(feature = "log")]
        log::trace!("native render {:?}", color);
        self.driver
            .write(iter::once(color))
            .map_err(|_| HardwareFault::Driver)
    }
}
