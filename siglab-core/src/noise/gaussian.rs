//! Gaussian white noise: an independent `Normal(mean, std_dev)` draw per tick.

use crate::error::Result;
use crate::series::Series;
use crate::signal::{GenerateContext, Generator, Signal};

use super::require_std_dev;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    mean: f64,
    std_dev: f64,
}

impl Gaussian {
    pub fn new(mean: f64, std_dev: f64) -> Result<Signal> {
        require_std_dev(std_dev)?;
        Ok(Signal::new(Self { mean, std_dev }))
    }

    /// Standard normal noise.
    pub fn standard() -> Signal {
        Signal::new(Self::default())
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl Generator for Gaussian {
    fn describe(&self) -> String {
        format!("gaussian({}, {})", self.mean, self.std_dev)
    }

    fn generate(&self, ctx: &GenerateContext) -> Result<Series> {
        Ok(Series::random_normal(
            ctx.tick_count,
            self.mean,
            self.std_dev,
            ctx.dtype,
            ctx.seed,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;
    use crate::series::DType;
    use chrono::{Duration, NaiveDate};

    fn year() -> Interval {
        Interval::from_dates(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    fn draw(signal: &Signal, seed: Option<u64>) -> Vec<f64> {
        signal
            .sample_with(&year(), Duration::hours(1), DType::Float32, seed)
            .unwrap()
            .into_iter()
            .map(|s| s.value)
            .collect()
    }

    #[test]
    fn same_seed_same_values() {
        let noise = Gaussian::standard();
        assert_eq!(draw(&noise, Some(42)), draw(&noise, Some(42)));
    }

    #[test]
    fn different_seeds_differ() {
        let noise = Gaussian::standard();
        assert_ne!(draw(&noise, Some(1)), draw(&noise, Some(2)));
    }

    #[test]
    fn unseeded_calls_differ() {
        let noise = Gaussian::standard();
        assert_ne!(draw(&noise, None), draw(&noise, None));
    }

    #[test]
    fn moments_match_parameters() {
        let noise = Gaussian::new(10.0, 3.0).unwrap();
        let xs = draw(&noise, Some(7));
        let n = xs.len() as f64;
        let mean = xs.iter().sum::<f64>() / n;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        assert!((mean - 10.0).abs() < 0.15, "mean={mean}");
        assert!((var - 9.0).abs() < 0.6, "var={var}");
    }

    #[test]
    fn zero_std_dev_is_constant() {
        let noise = Gaussian::new(4.0, 0.0).unwrap();
        assert!(draw(&noise, Some(3)).iter().all(|v| *v == 4.0));
    }

    #[test]
    fn negative_std_dev_rejected() {
        assert!(Gaussian::new(0.0, -1.0).unwrap_err().is_invalid_argument());
        assert!(Gaussian::new(0.0, f64::NAN).is_err());
    }
}
