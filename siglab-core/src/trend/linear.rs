//! Linear trend: `gradient * (i * granularity / duration) + intercept`.

use chrono::Duration;

use crate::error::Result;
use crate::series::Series;
use crate::signal::{format_duration, GenerateContext, Generator, Signal};

use super::require_positive;

/// Grows by `gradient` every `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    gradient: f64,
    duration: Duration,
    intercept: f64,
}

impl Linear {
    pub fn new(gradient: f64, duration: Duration) -> Result<Signal> {
        Self::with_intercept(gradient, duration, 0.0)
    }

    /// Fails with `InvalidArgument` unless `duration` is positive.
    pub fn with_intercept(gradient: f64, duration: Duration, intercept: f64) -> Result<Signal> {
        require_positive("duration", duration)?;
        Ok(Signal::new(Self {
            gradient,
            duration,
            intercept,
        }))
    }
}

impl Generator for Linear {
    fn describe(&self) -> String {
        if self.intercept == 0.0 {
            format!("linear({}, {})", self.gradient, format_duration(self.duration))
        } else {
            format!(
                "linear({}, {}, {})",
                self.gradient,
                format_duration(self.duration),
                self.intercept
            )
        }
    }

    fn generate(&self, ctx: &GenerateContext) -> Result<Series> {
        let scale = ctx.scale(self.duration);
        Ok(ctx
            .ticks()
            .mul_scalar(scale)
            .mul_scalar(self.gradient)
            .add_scalar(self.intercept))
    }
}
