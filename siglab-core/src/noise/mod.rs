//! Noise generators: white (Gaussian) and red (AR(1)) noise.
//!
//! Both draw from the seed in the sampling context. The same seed yields the
//! same values; an absent seed yields fresh values on every call.

pub mod gaussian;
pub mod red;

pub use gaussian::Gaussian;
pub use red::Red;

use crate::error::{Result, SignalError};

pub(crate) fn require_std_dev(std_dev: f64) -> Result<()> {
    if std_dev.is_finite() && std_dev >= 0.0 {
        Ok(())
    } else {
        Err(SignalError::invalid(format!(
            "standard deviation must be finite and non-negative, got {std_dev}"
        )))
    }
}
