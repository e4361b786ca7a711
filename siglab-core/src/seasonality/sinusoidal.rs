//! Sinusoidal seasonality.
//!
//! `amplitude * sin(2π * frequency * (i - phase)) + intercept`, where
//! `frequency = granularity / period` and `phase = offset / granularity`.
//! A positive `offset` delays the wave.

use chrono::Duration;

use crate::error::Result;
use crate::interval::duration_ratio;
use crate::series::Series;
use crate::signal::{format_duration, GenerateContext, Generator, Signal};
use crate::trend::require_positive;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sinusoidal {
    amplitude: f64,
    period: Duration,
    intercept: f64,
    offset: Duration,
}

impl Sinusoidal {
    pub fn new(amplitude: f64, period: Duration) -> Result<Signal> {
        Self::with_shift(amplitude, period, 0.0, Duration::zero())
    }

    /// Wave shifted up by `intercept` and delayed by `offset`.
    ///
    /// Fails with `InvalidArgument` unless `period` is positive.
    pub fn with_shift(
        amplitude: f64,
        period: Duration,
        intercept: f64,
        offset: Duration,
    ) -> Result<Signal> {
        require_positive("period", period)?;
        Ok(Signal::new(Self {
            amplitude,
            period,
            intercept,
            offset,
        }))
    }
}

impl Generator for Sinusoidal {
    fn describe(&self) -> String {
        let mut out = format!(
            "sinusoidal({}, {}",
            self.amplitude,
            format_duration(self.period)
        );
        if self.intercept != 0.0 || !self.offset.is_zero() {
            out.push_str(&format!(
                ", {}, {}",
                self.intercept,
                format_duration(self.offset)
            ));
        }
        out.push(')');
        out
    }

    fn generate(&self, ctx: &GenerateContext) -> Result<Series> {
        let frequency = ctx.scale(self.period);
        let phase = duration_ratio(self.offset, ctx.granularity);
        Ok(ctx
            .ticks()
            .sub_scalar(phase)
            .mul_scalar(frequency * 2.0 * std::f64::consts::PI)
            .sin()
            .mul_scalar(self.amplitude)
            .add_scalar(self.intercept))
    }
}
