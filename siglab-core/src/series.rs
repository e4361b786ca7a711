//! Numeric backend: fixed-precision elementwise arithmetic over sequences.
//!
//! A [`Series`] is a one-dimensional sequence of values evaluated at the
//! precision named by its [`DType`]. Every scalar operand and every
//! intermediate result is quantized, so a chain of operations behaves like
//! the same chain evaluated natively in `f32` or `i32`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SignalError};
use crate::rng;

/// Evaluation precision for generated values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    /// 32-bit float arithmetic.
    #[default]
    #[serde(alias = "float")]
    Float32,
    /// 32-bit integer arithmetic; values truncate toward zero.
    #[serde(alias = "int")]
    Int32,
}

impl DType {
    /// Round `x` to this precision.
    pub fn quantize(self, x: f64) -> f64 {
        match self {
            Self::Float32 => x as f32 as f64,
            // `as` saturates at the i32 bounds and maps NaN to 0.
            Self::Int32 => x as i32 as f64,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Float32 => "float32",
            Self::Int32 => "int32",
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DType {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "float32" | "float" => Ok(Self::Float32),
            "int32" | "int" => Ok(Self::Int32),
            other => Err(SignalError::invalid(format!(
                "unknown dtype '{other}' (expected float32 or int32)"
            ))),
        }
    }
}

/// A sequence of values held at a fixed precision.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    dtype: DType,
    values: Vec<f64>,
}

impl Series {
    /// Quantize `values` into a new series.
    pub fn from_values(values: Vec<f64>, dtype: DType) -> Self {
        let mut series = Self { dtype, values };
        series.values.iter_mut().for_each(|v| *v = dtype.quantize(*v));
        series
    }

    /// `len` copies of `value`.
    pub fn fill(len: usize, value: f64, dtype: DType) -> Self {
        Self {
            dtype,
            values: vec![dtype.quantize(value); len],
        }
    }

    /// `num` evenly spaced values from `start` to `stop` inclusive.
    pub fn linspace(start: f64, stop: f64, num: usize, dtype: DType) -> Self {
        let values = match num {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (num - 1) as f64;
                (0..num).map(|i| start + step * i as f64).collect()
            }
        };
        Self::from_values(values, dtype)
    }

    /// The tick index sequence `0, 1, …, count - 1`.
    pub fn ticks(count: usize, dtype: DType) -> Self {
        Self::linspace(0.0, count.saturating_sub(1) as f64, count, dtype)
    }

    /// `len` independent draws from `Normal(mean, std_dev)`.
    ///
    /// With a seed the draws are reproducible; without one they come from
    /// an entropy-seeded generator.
    pub fn random_normal(
        len: usize,
        mean: f64,
        std_dev: f64,
        dtype: DType,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = rng::rng_for_seed(seed);
        let mean = dtype.quantize(mean);
        let std_dev = dtype.quantize(std_dev);
        let values = (0..len)
            .map(|_| mean + std_dev * rng::standard_normal(&mut rng))
            .collect();
        Self::from_values(values, dtype)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    fn map(mut self, f: impl Fn(f64) -> f64) -> Self {
        let dtype = self.dtype;
        self.values.iter_mut().for_each(|v| *v = dtype.quantize(f(*v)));
        self
    }

    /// Combine two equal-length series position by position.
    pub fn zip_with(mut self, other: &Series, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        if self.len() != other.len() {
            return Err(SignalError::ShapeMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        let dtype = self.dtype;
        self.values
            .iter_mut()
            .zip(&other.values)
            .for_each(|(a, &b)| *a = dtype.quantize(f(*a, b)));
        Ok(self)
    }

    pub fn add(self, other: &Series) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn mul(self, other: &Series) -> Result<Self> {
        self.zip_with(other, |a, b| a * b)
    }

    pub fn add_scalar(self, scalar: f64) -> Self {
        let s = self.dtype.quantize(scalar);
        self.map(|v| v + s)
    }

    pub fn sub_scalar(self, scalar: f64) -> Self {
        let s = self.dtype.quantize(scalar);
        self.map(|v| v - s)
    }

    pub fn mul_scalar(self, scalar: f64) -> Self {
        let s = self.dtype.quantize(scalar);
        self.map(|v| v * s)
    }

    /// Raise `base` to each element: `base ^ v`.
    pub fn scalar_pow(self, base: f64) -> Self {
        let b = self.dtype.quantize(base);
        self.map(|v| b.powf(v))
    }

    pub fn sin(self) -> Self {
        self.map(f64::sin)
    }
}
