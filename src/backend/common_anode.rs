use embedded_hal::pwm::{Error as _, SetDutyCycle};

use super::LedOutput;
use crate::color::Rgb;
use crate::error::HardwareFault;

/// Common-anode RGB LED on three PWM channels.
///
/// The anode is tied high, so a channel lights while its pin is low and
/// every duty cycle is written inverted.
pub struct CommonAnodeLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> CommonAnodeLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    pub const fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    pub fn into_inner(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

fn write_inverted<P: SetDutyCycle>(pin: &mut P, value: u8) -> Result<(), HardwareFault> {
    pin.set_duty_cycle_fraction(u16::from(u8::MAX - value), u16::from(u8::MAX))
        .map_err(|err| HardwareFault::Pwm(err.kind()))
}

impl<R, G, B> LedOutput for CommonAnodeLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn render(&mut self, color: Rgb) -> Result<(), HardwareFault> {
        write_inverted(&mut self.red, color.r)?;
        write_inverted(&mut self.green, color.g)?;
        write_inverted(&mut self.blue, color.b)
    }
}
