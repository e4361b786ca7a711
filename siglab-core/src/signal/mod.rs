//! The signal contract: generation, combination and sampling.
//!
//! Every node of a signal tree implements [`Generator`]. Callers hold nodes
//! through the [`Signal`] handle, which shares ownership of an immutable
//! generator, so one subtree can appear in many trees and be sampled from
//! many threads at once.

pub mod composite;

pub use composite::{Composite, Operator};

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SignalError};
use crate::interval::{duration_ratio, nanos, Interval};
use crate::series::{DType, Series};

/// One output record: a tick's start instant and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub date: DateTime<Utc>,
    pub value: f64,
}

/// Per-call arguments threaded through [`Generator::generate`].
///
/// Nodes never store any of this; everything that varies between sampling
/// calls travels here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateContext {
    pub interval: Interval,
    pub granularity: Duration,
    pub tick_count: usize,
    pub dtype: DType,
    pub seed: Option<u64>,
}

impl GenerateContext {
    /// Validate `interval` against `granularity` and build a context.
    pub fn new(
        interval: Interval,
        granularity: Duration,
        dtype: DType,
        seed: Option<u64>,
    ) -> Result<Self> {
        let tick_count = interval.tick_count(granularity)?;
        Ok(Self {
            interval,
            granularity,
            tick_count,
            dtype,
            seed,
        })
    }

    /// Granularity expressed in units of `reference`.
    pub fn scale(&self, reference: Duration) -> f64 {
        duration_ratio(self.granularity, reference)
    }

    /// The tick index sequence `0..tick_count` at this context's precision.
    pub fn ticks(&self) -> Series {
        Series::ticks(self.tick_count, self.dtype)
    }
}

/// A node in a signal tree.
///
/// `generate` must return exactly `ctx.tick_count` values and must not keep
/// any state between calls.
pub trait Generator: Send + Sync + fmt::Debug {
    /// Human-readable expression for this node, e.g. `linear(1, 1d)`.
    fn describe(&self) -> String;

    /// Compute this node's values for every tick in `ctx`.
    fn generate(&self, ctx: &GenerateContext) -> Result<Series>;
}

/// Shared handle to an immutable signal tree.
#[derive(Clone)]
pub struct Signal(Arc<dyn Generator>);

impl Signal {
    pub fn new<G: Generator + 'static>(generator: G) -> Self {
        Self(Arc::new(generator))
    }

    /// `self + other`, evaluated pointwise.
    pub fn add(&self, other: &Signal) -> Signal {
        Signal::new(Composite::new(self.clone(), other.clone(), Operator::Add))
    }

    /// `self * other`, evaluated pointwise.
    pub fn mul(&self, other: &Signal) -> Signal {
        Signal::new(Composite::new(self.clone(), other.clone(), Operator::Mul))
    }

    pub fn describe(&self) -> String {
        self.0.describe()
    }

    pub fn generate(&self, ctx: &GenerateContext) -> Result<Series> {
        self.0.generate(ctx)
    }

    /// True when both handles point at the same node.
    pub fn ptr_eq(&self, other: &Signal) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Sample at `Float32` precision without a seed.
    pub fn sample(&self, interval: &Interval, granularity: Duration) -> Result<Vec<Sample>> {
        self.sample_with(interval, granularity, DType::default(), None)
    }

    /// Sample every tick of `granularity` in `interval`.
    ///
    /// Fails with `InvalidArgument` when the interval is empty or the
    /// granularity does not evenly divide it; nothing is generated in that
    /// case. The same `seed` reaches every noise leaf in the tree.
    pub fn sample_with(
        &self,
        interval: &Interval,
        granularity: Duration,
        dtype: DType,
        seed: Option<u64>,
    ) -> Result<Vec<Sample>> {
        let starts = interval.split_starts(granularity)?;
        let ctx = GenerateContext {
            interval: *interval,
            granularity,
            tick_count: starts.len(),
            dtype,
            seed,
        };
        debug!(
            signal = %self.describe(),
            ticks = ctx.tick_count,
            %dtype,
            ?seed,
            "sampling signal"
        );

        let values = self.generate(&ctx)?;
        if values.len() != starts.len() {
            return Err(SignalError::ShapeMismatch {
                expected: starts.len(),
                actual: values.len(),
            });
        }

        Ok(starts
            .into_iter()
            .zip(values.into_values())
            .map(|(date, value)| Sample { date, value })
            .collect())
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl std::ops::Add for Signal {
    type Output = Signal;

    fn add(self, rhs: Signal) -> Signal {
        Signal::add(&self, &rhs)
    }
}

impl std::ops::Add<&Signal> for &Signal {
    type Output = Signal;

    fn add(self, rhs: &Signal) -> Signal {
        Signal::add(self, rhs)
    }
}

impl std::ops::Mul for Signal {
    type Output = Signal;

    fn mul(self, rhs: Signal) -> Signal {
        Signal::mul(&self, &rhs)
    }
}

impl std::ops::Mul<&Signal> for &Signal {
    type Output = Signal;

    fn mul(self, rhs: &Signal) -> Signal {
        Signal::mul(self, rhs)
    }
}

/// Format a duration the way configs spell it: `1d`, `36h`, `250ms`.
pub(crate) fn format_duration(d: Duration) -> String {
    const UNITS: [(&str, i128); 8] = [
        ("w", 604_800_000_000_000),
        ("d", 86_400_000_000_000),
        ("h", 3_600_000_000_000),
        ("m", 60_000_000_000),
        ("s", 1_000_000_000),
        ("ms", 1_000_000),
        ("us", 1_000),
        ("ns", 1),
    ];
    let ns = nanos(d);
    if ns == 0 {
        return "0ms".to_string();
    }
    UNITS
        .iter()
        .find(|(_, size)| ns % size == 0)
        .map(|(unit, size)| format!("{}{unit}", ns / size))
        .unwrap_or_else(|| format!("{ns}ns"))
}
