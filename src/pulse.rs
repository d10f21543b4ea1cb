//! Single color pulse.
//!
//! A pulse ramps the HSL lightness of a color up from black and back down,
//! with the time between steps following an ease in out curve.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use heapless::Vec;
use libm::roundf;

use crate::backend::LedOutput;
use crate::color::{Rgb, with_lightness};
use crate::easing::eased_checkpoint;
use crate::error::{Error, Result};
use crate::observer::ShineObserver;

/// Number of eased checkpoints
pub const PULSE_STEPS: usize = 20;
/// Renders per pulse, one per gap between checkpoints
pub const PULSE_RENDERS: usize = PULSE_STEPS - 1;
/// Distinct lightness levels on the rising half
pub const RAMP_LEN: usize = PULSE_STEPS / 2;
/// Lightness reached at the top of the ramp, exclusive
pub const PEAK_LIGHTNESS: f32 = 0.5;

pub const MIN_PULSE_DURATION: Duration = Duration::from_millis(500);
pub const MAX_PULSE_DURATION: Duration = Duration::from_millis(2000);
pub const DEFAULT_PULSE_DURATION: Duration = Duration::from_millis(1000);

/// Reject durations outside `MIN_PULSE_DURATION..=MAX_PULSE_DURATION`
pub fn check_duration(duration: Duration) -> Result<()> {
    if duration < MIN_PULSE_DURATION || duration > MAX_PULSE_DURATION {
        return Err(Error::InvalidDuration(duration));
    }
    Ok(())
}

/// `RAMP_LEN` copies of `color` with lightness from 0.0 towards 0.5
#[allow(clippy::cast_precision_loss)]
pub fn lightness_ramp(color: Rgb) -> [Rgb; RAMP_LEN] {
    core::array::from_fn(|i| {
        let light = (i as f32 / RAMP_LEN as f32) * PEAK_LIGHTNESS;
        with_lightness(color, light)
    })
}

/// One render of a pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseStep {
    pub color: Rgb,
    /// Wait after rendering `color`
    pub delay: Duration,
}

/// Precomputed render sequence for one pulse; built per call, never reused
#[derive(Debug, Clone)]
pub struct PulsePlan {
    color: Rgb,
    duration: Duration,
    steps: Vec<PulseStep, PULSE_RENDERS>,
}

impl PulsePlan {
    pub fn new(color: Rgb, duration: Duration) -> Result<Self> {
        check_duration(duration)?;

        let checkpoints = checkpoints_us(duration);
        let ramp = lightness_ramp(color);

        let mut steps = Vec::new();
        for (i, pair) in checkpoints.windows(2).enumerate() {
            let step_color = if i < RAMP_LEN {
                ramp[i]
            } else {
                // Falling half walks the ramp back down from ramp[RAMP_LEN - 2]
                ramp[RAMP_LEN - 1 - (i - RAMP_LEN) - 1]
            };
            let delay = Duration::from_micros(pair[1].saturating_sub(pair[0]));
            // At most PULSE_RENDERS windows exist
            let _ = steps.push(PulseStep {
                color: step_color,
                delay,
            });
        }

        Ok(Self {
            color,
            duration,
            steps,
        })
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub fn steps(&self) -> &[PulseStep] {
        &self.steps
    }

    /// Sum of all inter-step delays
    pub fn total_delay(&self) -> Duration {
        let micros = self.steps.iter().map(|step| step.delay.as_micros()).sum();
        Duration::from_micros(micros)
    }

    /// Render every step, sleeping between them.
    ///
    /// Blocks for the whole pulse. A failed render aborts the remaining
    /// steps and leaves the LED at the last color that was written.
    pub fn play<O, D, Obs>(
        &self,
        output: &mut O,
        delay: &mut D,
        observer: &mut Obs,
    ) -> Result<()>
    where
        O: LedOutput + ?Sized,
        D: DelayNs + ?Sized,
        Obs: ShineObserver + ?Sized,
    {
        observer.on_pulse_start(self.color, self.duration);
        for (index, step) in self.steps.iter().enumerate() {
            observer.on_render(step.color);
            output.render(step.color)?;
            observer.on_pulse_step(index, step.color, step.delay);
            delay.delay_us(u32::try_from(step.delay.as_micros()).unwrap_or(u32::MAX));
        }
        Ok(())
    }
}

/// Eased checkpoints in whole microseconds
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn checkpoints_us(duration: Duration) -> [u64; PULSE_STEPS] {
    let total = duration.as_micros() as f32;
    core::array::from_fn(|i| roundf(eased_checkpoint(i, PULSE_STEPS, total)) as u64)
}
