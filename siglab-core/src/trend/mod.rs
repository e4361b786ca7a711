//! Trend generators: flat, linear and exponential.
//!
//! Linear and exponential trends carry a reference `duration`; the tick
//! index is rescaled by `granularity / duration` so the same trend rises at
//! the same rate whatever granularity it is sampled at.

pub mod exponential;
pub mod flat;
pub mod linear;

pub use exponential::Exponential;
pub use flat::Flat;
pub use linear::Linear;

use chrono::Duration;

use crate::error::{Result, SignalError};
use crate::interval::nanos;

pub(crate) fn require_positive(what: &str, duration: Duration) -> Result<()> {
    if nanos(duration) > 0 {
        Ok(())
    } else {
        Err(SignalError::invalid(format!("{what} must have some duration")))
    }
}
