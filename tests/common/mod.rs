#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::{self, SetDutyCycle};
use embedded_hal::spi::{self, SpiBus};
use neopixel_shine::{
    BackendKind, BoardProfile, Duration, Error, HandleProvider, NeopixelConfig, Rgb,
    ShineObserver,
};
use smart_leds::SmartLedsWrite;

/// SPI bus that records every write
#[derive(Debug, Default)]
pub struct MockSpi {
    pub writes: Vec<Vec<u8>>,
    pub flushes: usize,
    pub fail_after: Option<usize>,
}

impl MockSpi {
    pub fn failing_after(writes: usize) -> Self {
        Self {
            fail_after: Some(writes),
            ..Self::default()
        }
    }
}

impl spi::ErrorType for MockSpi {
    type Error = spi::ErrorKind;
}

impl SpiBus<u8> for MockSpi {
    fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        if self.fail_after.is_some_and(|limit| self.writes.len() >= limit) {
            return Err(spi::ErrorKind::Overrun);
        }
        self.writes.push(words.to_vec());
        Ok(())
    }

    fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.write(write)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.write(words)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Native LED driver that records every pixel
#[derive(Debug, Default)]
pub struct MockDriver {
    pub pixels: Vec<Rgb>,
    pub fail: bool,
}

impl SmartLedsWrite for MockDriver {
    type Error = ();
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        if self.fail {
            return Err(());
        }
        self.pixels.extend(iterator.into_iter().map(Into::into));
        Ok(())
    }
}

/// Delay that records requested sleeps instead of sleeping
#[derive(Debug, Default)]
pub struct MockDelay {
    pub sleeps_us: Vec<u32>,
}

impl MockDelay {
    pub fn total_us(&self) -> u64 {
        self.sleeps_us.iter().map(|&us| u64::from(us)).sum()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.sleeps_us.push(ns / 1000);
    }

    fn delay_us(&mut self, us: u32) {
        self.sleeps_us.push(us);
    }
}

/// PWM channel that records duty cycles
#[derive(Debug, Default)]
pub struct MockPwm {
    pub duties: Vec<u16>,
}

impl pwm::ErrorType for MockPwm {
    type Error = pwm::ErrorKind;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duties.push(duty);
        Ok(())
    }
}

/// Hands out mock handles and remembers what was opened
#[derive(Debug, Default)]
pub struct MockProvider {
    pub native_pin: Option<u8>,
    pub spi_interface: Option<String>,
}

impl HandleProvider for MockProvider {
    type Native = MockDriver;
    type Spi = MockSpi;

    fn open_native(
        &mut self,
        gpio_pin: u8,
        _config: &NeopixelConfig,
    ) -> Result<Self::Native, Error> {
        self.native_pin = Some(gpio_pin);
        Ok(MockDriver::default())
    }

    fn open_spi(&mut self, config: &NeopixelConfig) -> Result<Self::Spi, Error> {
        self.spi_interface = Some(config.spi_interface.as_str().to_owned());
        Ok(MockSpi::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Backend(BackendKind),
    Render(Rgb),
    PulseStart(Rgb, Duration),
    PulseStep(usize, Rgb, Duration),
}

#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<Event>,
}

impl ShineObserver for RecordingObserver {
    fn on_backend_selected(&mut self, kind: BackendKind, _profile: &BoardProfile) {
        self.events.push(Event::Backend(kind));
    }

    fn on_render(&mut self, color: Rgb) {
        self.events.push(Event::Render(color));
    }

    fn on_pulse_start(&mut self, color: Rgb, duration: Duration) {
        self.events.push(Event::PulseStart(color, duration));
    }

    fn on_pulse_step(&mut self, index: usize, color: Rgb, delay: Duration) {
        self.events.push(Event::PulseStep(index, color, delay));
    }
}

pub fn pi5() -> BoardProfile {
    BoardProfile::from_model("Raspberry Pi 5 Model B Rev 1.0")
}

pub fn pi4() -> BoardProfile {
    BoardProfile::from_model("Raspberry Pi 4 Model B Rev 1.4")
}
