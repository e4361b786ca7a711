//! Exponential trend: `factor ^ (i * granularity / duration) + asymptote`.
//!
//! The curve multiplies by `factor` every `duration` and starts at
//! `1 + asymptote` on the first tick.

use chrono::Duration;

use crate::error::Result;
use crate::series::Series;
use crate::signal::{format_duration, GenerateContext, Generator, Signal};

use super::require_positive;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    factor: f64,
    duration: Duration,
    asymptote: f64,
}

impl Exponential {
    pub fn new(factor: f64, duration: Duration) -> Result<Signal> {
        Self::with_asymptote(factor, duration, 0.0)
    }

    /// Fails with `InvalidArgument` unless `duration` is positive.
    pub fn with_asymptote(factor: f64, duration: Duration, asymptote: f64) -> Result<Signal> {
        require_positive("duration", duration)?;
        Ok(Signal::new(Self {
            factor,
            duration,
            asymptote,
        }))
    }
}

impl Generator for Exponential {
    fn describe(&self) -> String {
        if self.asymptote == 0.0 {
            format!("exponential({}, {})", self.factor, format_duration(self.duration))
        } else {
            format!(
                "exponential({}, {}, {})",
                self.factor,
                format_duration(self.duration),
                self.asymptote
            )
        }
    }

    fn generate(&self, ctx: &GenerateContext) -> Result<Series> {
        let scale = ctx.scale(self.duration);
        Ok(ctx
            .ticks()
            .mul_scalar(scale)
            .scalar_pow(self.factor)
            .add_scalar(self.asymptote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{self, assert_all_close, week};

    fn values(signal: &Signal) -> Vec<f64> {
        test_helpers::values(signal, &week(), Duration::days(1))
    }

    #[test]
    fn doubles_every_day() {
        let signal = Exponential::new(2.0, Duration::days(1)).unwrap();
        assert_eq!(
            values(&signal),
            vec![1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0]
        );
    }

    #[test]
    fn asymptote_shifts_every_value() {
        let signal = Exponential::with_asymptote(2.0, Duration::days(1), 7.0).unwrap();
        assert_eq!(
            values(&signal),
            vec![8.0, 9.0, 11.0, 15.0, 23.0, 39.0, 71.0]
        );
    }

    #[test]
    fn doubles_over_a_week_at_daily_ticks() {
        let signal = Exponential::new(2.0, Duration::days(7)).unwrap();
        assert_all_close(
            &values(&signal),
            &[
                1.0,
                1.1040894985198975,
                1.2190136909484863,
                1.3459001779556274,
                1.4859943389892578,
                1.640670657157898,
                1.8114473819732666,
            ],
            1e-6,
        );
    }

    #[test]
    fn non_positive_duration_rejected() {
        assert!(Exponential::new(2.0, Duration::zero())
            .unwrap_err()
            .is_invalid_argument());
    }
}
