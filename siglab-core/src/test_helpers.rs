//! Shared fixtures for unit tests.

use chrono::{Duration, NaiveDate};

use crate::interval::Interval;
use crate::signal::Signal;

/// 2022-03-27 to 2022-04-03: seven days.
pub fn week() -> Interval {
    Interval::from_dates(
        NaiveDate::from_ymd_opt(2022, 3, 27).unwrap(),
        NaiveDate::from_ymd_opt(2022, 4, 3).unwrap(),
    )
}

/// Values of `signal` sampled over `interval` with the default options.
pub fn values(signal: &Signal, interval: &Interval, granularity: Duration) -> Vec<f64> {
    signal
        .sample(interval, granularity)
        .unwrap()
        .iter()
        .map(|s| s.value)
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

pub fn assert_all_close(actual: &[f64], expected: &[f64], epsilon: f64) {
    assert_eq!(actual.len(), expected.len(), "length differs");
    for (a, e) in actual.iter().zip(expected) {
        assert_approx(*a, *e, epsilon);
    }
}
