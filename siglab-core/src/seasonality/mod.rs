//! Seasonality generators.

pub mod sinusoidal;

pub use sinusoidal::Sinusoidal;
