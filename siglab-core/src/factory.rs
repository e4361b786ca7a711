//! Factory: converts a declarative [`SignalConfig`] tree into a [`Signal`].

use thiserror::Error;

use crate::config::{parse_duration, DurationError, SignalConfig};
use crate::error::SignalError;
use crate::noise::{Gaussian, Red};
use crate::preset::SignalPreset;
use crate::seasonality::Sinusoidal;
use crate::signal::Signal;
use crate::trend::{Exponential, Flat, Linear};

/// Errors that can occur while building a signal tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    #[error(transparent)]
    Duration(#[from] DurationError),
    #[error("{kind} node rejected: {source}")]
    Signal {
        kind: &'static str,
        #[source]
        source: SignalError,
    },
}

/// Build a signal tree from `config`, bottom-up.
///
/// Shared presets are rebuilt for every reference; the resulting nodes are
/// immutable, so duplicates behave identically to a shared node.
pub fn build_signal(config: &SignalConfig) -> Result<Signal, FactoryError> {
    let kind = config.kind();
    let rejected = |source: SignalError| FactoryError::Signal { kind, source };

    match config {
        SignalConfig::Flat { value } => Ok(Flat::new(*value)),
        SignalConfig::Linear {
            gradient,
            duration,
            intercept,
        } => Linear::with_intercept(*gradient, parse_duration(duration)?, *intercept)
            .map_err(rejected),
        SignalConfig::Exponential {
            factor,
            duration,
            asymptote,
        } => Exponential::with_asymptote(*factor, parse_duration(duration)?, *asymptote)
            .map_err(rejected),
        SignalConfig::Sinusoidal {
            amplitude,
            period,
            intercept,
            offset,
        } => {
            let offset = match offset {
                Some(offset) => parse_duration(offset)?,
                None => chrono::Duration::zero(),
            };
            Sinusoidal::with_shift(*amplitude, parse_duration(period)?, *intercept, offset)
                .map_err(rejected)
        }
        SignalConfig::Gaussian { mean, std_dev } => {
            Gaussian::new(*mean, *std_dev).map_err(rejected)
        }
        SignalConfig::Red {
            mean,
            std_dev,
            correlation,
        } => Red::new(*mean, *std_dev, *correlation).map_err(rejected),
        SignalConfig::Add { left, right } => {
            Ok(build_signal(left)?.add(&build_signal(right)?))
        }
        SignalConfig::Mul { left, right } => {
            Ok(build_signal(left)?.mul(&build_signal(right)?))
        }
        SignalConfig::Preset { name } => {
            let preset = SignalPreset::from_name(name)
                .ok_or_else(|| FactoryError::UnknownPreset(name.clone()))?;
            build_signal(&preset.to_config())
        }
    }
}
