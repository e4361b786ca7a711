//! Red noise: a first-order autoregressive process over white noise.
//!
//! With white draws `w[i] ~ Normal(mean, std_dev)`:
//! `x[0] = w[0]` and `x[i] = r * x[i-1] + sqrt(1 - r²) * w[i]`.
//! For zero-mean noise and `r` in `[-1, 1]` the marginal variance stays at
//! `std_dev²` while neighbouring ticks correlate with coefficient `r`.

use crate::error::{Result, SignalError};
use crate::series::Series;
use crate::signal::{GenerateContext, Generator, Signal};

use super::require_std_dev;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Red {
    mean: f64,
    std_dev: f64,
    correlation: f64,
}

impl Red {
    /// Fails with `InvalidArgument` when `correlation` lies outside `[-1, 1]`
    /// or `std_dev` is negative.
    pub fn new(mean: f64, std_dev: f64, correlation: f64) -> Result<Signal> {
        require_std_dev(std_dev)?;
        if !(-1.0..=1.0).contains(&correlation) {
            return Err(SignalError::invalid(format!(
                "correlation must lie in [-1, 1], got {correlation}"
            )));
        }
        Ok(Signal::new(Self {
            mean,
            std_dev,
            correlation,
        }))
    }

    /// Zero-mean unit-variance red noise with correlation 0.5.
    pub fn standard() -> Signal {
        Signal::new(Self::default())
    }
}

impl Default for Red {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
            correlation: 0.5,
        }
    }
}

impl Generator for Red {
    fn describe(&self) -> String {
        format!("red({}, {}, {})", self.mean, self.std_dev, self.correlation)
    }

    fn generate(&self, ctx: &GenerateContext) -> Result<Series> {
        let white = Series::random_normal(
            ctx.tick_count,
            self.mean,
            self.std_dev,
            ctx.dtype,
            ctx.seed,
        );
        let r = self.correlation;
        let innovation = (1.0 - r * r).sqrt();

        let mut values = Vec::with_capacity(white.len());
        let mut prev = None;
        for &w in white.values() {
            let x = match prev {
                None => w,
                Some(p) => ctx.dtype.quantize(r * p + innovation * w),
            };
            values.push(x);
            prev = Some(x);
        }
        Ok(Series::from_values(values, ctx.dtype))
    }
}
