//! Flat trend: the same value at every tick.

use crate::error::Result;
use crate::series::Series;
use crate::signal::{GenerateContext, Generator, Signal};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flat {
    value: f64,
}

impl Flat {
    pub fn new(value: f64) -> Signal {
        Signal::new(Self { value })
    }
}

impl Default for Flat {
    fn default() -> Self {
        Self { value: 0.0 }
    }
}

impl Generator for Flat {
    fn describe(&self) -> String {
        format!("flat({})", self.value)
    }

    fn generate(&self, ctx: &GenerateContext) -> Result<Series> {
        Ok(Series::fill(ctx.tick_count, self.value, ctx.dtype))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::DType;
    use crate::test_helpers::week;
    use chrono::Duration;

    #[test]
    fn flat_is_constant() {
        let samples = Flat::new(9.0).sample(&week(), Duration::hours(42)).unwrap();
        let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![9.0, 9.0, 9.0, 9.0]);
    }

    #[test]
    fn default_is_zero() {
        let samples = Signal::new(Flat::default())
            .sample(&week(), Duration::days(1))
            .unwrap();
        assert!(samples.iter().all(|s| s.value == 0.0));
    }

    #[test]
    fn int32_truncates_value() {
        let samples = Flat::new(2.75)
            .sample_with(&week(), Duration::days(1), DType::Int32, None)
            .unwrap();
        assert!(samples.iter().all(|s| s.value == 2.0));
    }
}
