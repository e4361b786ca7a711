//! Declarative signal trees and sampling windows, loaded from TOML.
//!
//! ```toml
//! [sampling]
//! start = "2022-03-27"
//! end = "2022-04-03"
//! granularity = "1d"
//! seed = 42
//!
//! [signal]
//! type = "add"
//!
//! [signal.left]
//! type = "linear"
//! gradient = 1.0
//! duration = "1d"
//!
//! [signal.right]
//! type = "gaussian"
//! std_dev = 0.5
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::factory::{build_signal, FactoryError};
use crate::interval::{midnight_utc, Interval};
use crate::series::DType;
use crate::signal::Signal;

// ─── Errors ─────────────────────────────────────────────────────────

/// A duration string that does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid duration '{0}': expected <integer><unit>... with units ns, us, ms, s, m, h, d, w")]
pub struct DurationError(pub String);

/// Errors from loading a [`SynthConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid timestamp '{0}': expected RFC 3339 or YYYY-MM-DD")]
    InvalidTimestamp(String),

    #[error(transparent)]
    Duration(#[from] DurationError),

    #[error(transparent)]
    Factory(#[from] FactoryError),
}

// ─── Signal tree ────────────────────────────────────────────────────

fn one() -> f64 {
    1.0
}

fn half() -> f64 {
    0.5
}

/// One node of a declarative signal tree.
///
/// Parameters mirror the leaf constructors; omitted optional parameters take
/// the constructor defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignalConfig {
    Flat {
        #[serde(default)]
        value: f64,
    },
    Linear {
        gradient: f64,
        duration: String,
        #[serde(default)]
        intercept: f64,
    },
    Exponential {
        factor: f64,
        duration: String,
        #[serde(default)]
        asymptote: f64,
    },
    Sinusoidal {
        amplitude: f64,
        period: String,
        #[serde(default)]
        intercept: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        offset: Option<String>,
    },
    Gaussian {
        #[serde(default)]
        mean: f64,
        #[serde(default = "one")]
        std_dev: f64,
    },
    Red {
        #[serde(default)]
        mean: f64,
        #[serde(default = "one")]
        std_dev: f64,
        #[serde(default = "half")]
        correlation: f64,
    },
    Add {
        left: Box<SignalConfig>,
        right: Box<SignalConfig>,
    },
    Mul {
        left: Box<SignalConfig>,
        right: Box<SignalConfig>,
    },
    /// A named built-in tree, see [`crate::preset::SignalPreset`].
    Preset { name: String },
}

impl SignalConfig {
    pub fn add(left: SignalConfig, right: SignalConfig) -> Self {
        Self::Add {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn mul(left: SignalConfig, right: SignalConfig) -> Self {
        Self::Mul {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Node kind as spelled in the `type` key.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Flat { .. } => "flat",
            Self::Linear { .. } => "linear",
            Self::Exponential { .. } => "exponential",
            Self::Sinusoidal { .. } => "sinusoidal",
            Self::Gaussian { .. } => "gaussian",
            Self::Red { .. } => "red",
            Self::Add { .. } => "add",
            Self::Mul { .. } => "mul",
            Self::Preset { .. } => "preset",
        }
    }

    /// Tree shape with parameters stripped, e.g. `add(linear,gaussian)`.
    pub fn shape(&self) -> String {
        match self {
            Self::Add { left, right } | Self::Mul { left, right } => {
                format!("{}({},{})", self.kind(), left.shape(), right.shape())
            }
            Self::Preset { name } => format!("preset:{name}"),
            leaf => leaf.kind().to_string(),
        }
    }
}

// ─── Sampling window ────────────────────────────────────────────────

/// Where and how densely to sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Interval start (inclusive), RFC 3339 or `YYYY-MM-DD`.
    pub start: String,
    /// Interval end (exclusive).
    pub end: String,
    pub granularity: String,
    #[serde(default)]
    pub dtype: DType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SamplingConfig {
    pub fn interval(&self) -> Result<Interval, ConfigError> {
        Ok(Interval::new(
            parse_timestamp(&self.start)?,
            parse_timestamp(&self.end)?,
        ))
    }

    pub fn granularity(&self) -> Result<Duration, ConfigError> {
        Ok(parse_duration(&self.granularity)?)
    }
}

/// A complete synthesis job: a sampling window plus a signal tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    pub sampling: SamplingConfig,
    pub signal: SignalConfig,
}

impl SynthConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn build_signal(&self) -> Result<Signal, ConfigError> {
        Ok(build_signal(&self.signal)?)
    }
}

// ─── Parsing helpers ────────────────────────────────────────────────

/// Parse an RFC 3339 timestamp, or a bare date taken as midnight UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, ConfigError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(midnight_utc)
        .map_err(|_| ConfigError::InvalidTimestamp(s.to_string()))
}

/// Parse a duration such as `1d`, `36h`, `1d12h`, `250ms`, `500us` or `-6h`.
pub fn parse_duration(s: &str) -> Result<Duration, DurationError> {
    let err = || DurationError(s.to_string());
    let trimmed = s.trim();
    let (negative, mut rest) = match trimmed.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, trimmed),
    };
    if rest.is_empty() {
        return Err(err());
    }

    let mut total_ns: i128 = 0;
    while !rest.is_empty() {
        let digits = rest.find(|c: char| !c.is_ascii_digit()).ok_or_else(err)?;
        if digits == 0 {
            return Err(err());
        }
        let amount: i128 = rest[..digits].parse().map_err(|_| err())?;
        rest = &rest[digits..];
        let unit_len = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        let unit_ns: i128 = match &rest[..unit_len] {
            "ns" => 1,
            "us" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60_000_000_000,
            "h" => 3_600_000_000_000,
            "d" => 86_400_000_000_000,
            "w" => 604_800_000_000_000,
            _ => return Err(err()),
        };
        rest = &rest[unit_len..];
        total_ns = amount
            .checked_mul(unit_ns)
            .and_then(|ns| total_ns.checked_add(ns))
            .ok_or_else(err)?;
    }

    // chrono caps a Duration at i64::MAX milliseconds.
    let secs = i64::try_from(total_ns / 1_000_000_000)
        .ok()
        .filter(|secs| *secs <= i64::MAX / 1_000)
        .ok_or_else(err)?;
    let subsec = (total_ns % 1_000_000_000) as i64;
    let total = Duration::seconds(secs)
        .checked_add(&Duration::nanoseconds(subsec))
        .ok_or_else(err)?;
    Ok(if negative { -total } else { total })
}
