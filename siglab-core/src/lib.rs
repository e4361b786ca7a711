//! SigLab Core — composable synthetic time-series signals.
//!
//! This crate contains the signal engine:
//! - Half-open UTC intervals and their division into ticks
//! - A fixed-precision numeric backend (`Series`, `DType`)
//! - The `Generator` contract and the shared `Signal` handle
//! - Composite nodes combining two signals with `+` or `*`
//! - Trend (flat, linear, exponential), seasonality (sinusoidal) and
//!   noise (Gaussian, red) generators
//! - Declarative TOML configs, a factory, presets, fingerprints and export
//!
//! ```
//! use chrono::{Duration, NaiveDate};
//! use siglab_core::{Flat, Interval, Linear};
//!
//! let week = Interval::from_dates(
//!     NaiveDate::from_ymd_opt(2022, 3, 27).unwrap(),
//!     NaiveDate::from_ymd_opt(2022, 4, 3).unwrap(),
//! );
//! let signal = Linear::new(1.0, Duration::days(1))?.add(&Flat::new(9.0));
//! let values: Vec<f64> = signal
//!     .sample(&week, Duration::days(1))?
//!     .iter()
//!     .map(|s| s.value)
//!     .collect();
//! assert_eq!(values, [9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
//! # Ok::<(), siglab_core::SignalError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod factory;
pub mod fingerprint;
pub mod interval;
pub mod noise;
pub mod preset;
pub mod rng;
pub mod seasonality;
pub mod series;
pub mod signal;
pub mod trend;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::{ConfigError, SamplingConfig, SignalConfig, SynthConfig};
pub use error::SignalError;
pub use export::OutputFormat;
pub use factory::{build_signal, FactoryError};
pub use fingerprint::Fingerprint;
pub use interval::Interval;
pub use noise::{Gaussian, Red};
pub use preset::SignalPreset;
pub use rng::SeedHierarchy;
pub use seasonality::Sinusoidal;
pub use series::{DType, Series};
pub use signal::{Composite, GenerateContext, Generator, Operator, Sample, Signal};
pub use trend::{Exponential, Flat, Linear};
