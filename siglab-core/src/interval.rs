//! Half-open time intervals and their division into ticks.
//!
//! An [`Interval`] is `[start, end)` in UTC. Dividing it by a granularity
//! yields the tick-start timestamps that samples are aligned to. All
//! duration arithmetic is exact to the nanosecond.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::{Result, SignalError};

/// A half-open span of time `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Interval {
    /// Build an interval. `end <= start` is allowed and yields an empty interval.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Interval from midnight UTC of `start` to midnight UTC of `end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(midnight_utc(start), midnight_utc(end))
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Length of the interval; zero when empty.
    pub fn total_duration(&self) -> Duration {
        if self.is_empty() {
            Duration::zero()
        } else {
            self.end - self.start
        }
    }

    /// Number of ticks of `granularity` in this interval.
    ///
    /// Fails with `InvalidArgument` when the interval is empty, the
    /// granularity is not positive, exceeds the interval, or does not divide
    /// it exactly. Checks run in that order.
    pub fn tick_count(&self, granularity: Duration) -> Result<usize> {
        if self.is_empty() {
            return Err(SignalError::invalid(
                "must provide an interval with some duration of time",
            ));
        }
        let span = nanos(self.total_duration());
        let step = nanos(granularity);
        if step <= 0 {
            return Err(SignalError::invalid(format!(
                "granularity must be positive, got {step}ns"
            )));
        }
        if step > span {
            return Err(SignalError::invalid(format!(
                "granularity of {step}ns exceeds the interval duration of {span}ns"
            )));
        }
        if span % step != 0 {
            return Err(SignalError::invalid(format!(
                "granularity of {step}ns does not evenly divide the interval duration of {span}ns"
            )));
        }
        usize::try_from(span / step)
            .map_err(|_| SignalError::invalid("interval holds too many ticks"))
    }

    /// Start instant of every tick, in chronological order.
    ///
    /// The ticks cover the interval with no gaps or overlaps, so the result
    /// holds exactly `tick_count(granularity)` entries.
    pub fn split_starts(&self, granularity: Duration) -> Result<Vec<DateTime<Utc>>> {
        let count = self.tick_count(granularity)?;
        // Every tick start lies before `end`, so the additions cannot overflow.
        Ok(std::iter::successors(Some(self.start), |t| Some(*t + granularity))
            .take(count)
            .collect())
    }
}

pub(crate) fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Exact length of `d` in nanoseconds.
pub(crate) fn nanos(d: Duration) -> i128 {
    i128::from(d.num_seconds()) * 1_000_000_000 + i128::from(d.subsec_nanos())
}

/// Duration ratio `numerator / denominator`.
pub(crate) fn duration_ratio(numerator: Duration, denominator: Duration) -> f64 {
    nanos(numerator) as f64 / nanos(denominator) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::week;

    #[test]
    fn week_splits_into_seven_days() {
        let starts = week().split_starts(Duration::days(1)).unwrap();
        assert_eq!(starts.len(), 7);
        assert_eq!(starts[0], week().start());
        assert_eq!(starts[6], week().end() - Duration::days(1));
        for pair in starts.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn twelve_hour_ticks() {
        assert_eq!(week().tick_count(Duration::hours(12)).unwrap(), 14);
    }

    #[test]
    fn granularity_equal_to_interval_gives_one_tick() {
        assert_eq!(week().tick_count(Duration::weeks(1)).unwrap(), 1);
    }

    #[test]
    fn empty_interval_rejected() {
        let start = week().start();
        let empty = Interval::new(start, start);
        assert!(empty.is_empty());
        assert_eq!(empty.total_duration(), Duration::zero());
        let err = empty.tick_count(Duration::days(1)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn reversed_interval_is_empty() {
        let w = week();
        assert!(Interval::new(w.end(), w.start()).is_empty());
    }

    #[test]
    fn zero_and_negative_granularity_rejected() {
        assert!(week().tick_count(Duration::zero()).is_err());
        assert!(week().tick_count(Duration::days(-1)).is_err());
    }

    #[test]
    fn oversized_granularity_rejected() {
        let err = week().tick_count(Duration::days(8)).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn uneven_granularity_rejected() {
        let err = week().tick_count(Duration::hours(36)).unwrap_err();
        assert!(err.to_string().contains("evenly divide"));
    }

    #[test]
    fn empty_interval_reported_before_bad_granularity() {
        let start = week().start();
        let err = Interval::new(start, start)
            .tick_count(Duration::zero())
            .unwrap_err();
        assert!(err.to_string().contains("some duration of time"), "{err}");
    }

    #[test]
    fn non_positive_granularity_reported_before_oversized() {
        let err = week().tick_count(Duration::days(-8)).unwrap_err();
        assert!(err.to_string().contains("must be positive"), "{err}");
    }

    #[test]
    fn sub_millisecond_granularity_is_exact() {
        let start = week().start();
        let three_ms = Interval::new(start, start + Duration::milliseconds(3));
        let starts = three_ms.split_starts(Duration::microseconds(1_500)).unwrap();
        assert_eq!(starts, vec![start, start + Duration::microseconds(1_500)]);
    }

    #[test]
    fn sub_millisecond_remainder_rejected() {
        let start = week().start();
        let span = Interval::new(start, start + Duration::microseconds(1_500));
        let err = span.tick_count(Duration::milliseconds(1)).unwrap_err();
        assert!(err.to_string().contains("evenly divide"), "{err}");
    }

    #[test]
    fn nanosecond_granularity_within_a_microsecond() {
        let start = week().start();
        let span = Interval::new(start, start + Duration::microseconds(1));
        assert_eq!(span.tick_count(Duration::nanoseconds(250)).unwrap(), 4);
        assert!(span.tick_count(Duration::nanoseconds(300)).is_err());
    }

    #[test]
    fn nanos_of_negative_durations() {
        assert_eq!(nanos(Duration::nanoseconds(-1_500_000_001)), -1_500_000_001);
        assert_eq!(nanos(Duration::days(1)), 86_400_000_000_000);
    }

    #[test]
    fn ratio_of_durations() {
        assert_eq!(duration_ratio(Duration::hours(12), Duration::days(1)), 0.5);
        assert_eq!(
            duration_ratio(Duration::microseconds(1_500), Duration::milliseconds(3)),
            0.5
        );
    }
}
