//! Posting-cadence estimation from raw post timestamps.

use chrono::{DateTime, Utc};

/// Estimate a club's posting cadence from its post timestamps.
///
/// Returns a value in `[0.0, 1.0]`: close to one when many posts are packed
/// into a short span, close to zero when posting is sparse over a long span.
/// Sequences with fewer than two timestamps carry no frequency signal and
/// yield exactly `0.0`. The duration is a whole-day difference; fractional
/// time-of-day is discarded.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use clubpulse_core::posting_frequency;
///
/// assert_eq!(posting_frequency(&[]), 0.0);
///
/// let dates = vec![
///     Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2025, 8, 7, 0, 0, 0).unwrap(),
/// ];
/// assert!(posting_frequency(&dates) > 0.0);
/// ```
#[must_use]
pub fn posting_frequency(post_dates: &[DateTime<Utc>]) -> f64 {
    if post_dates.len() < 2 {
        return 0.0;
    }

    let mut sorted = post_dates.to_vec();
    sorted.sort_unstable();

    let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
        return 0.0;
    };

    let duration_days = (last - first).num_days();
    let num_posts = sorted.len();

    1.0 / (1.0 + duration_days as f64 / num_posts as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn day(d: u32) -> DateTime<Utc> {
        match Utc.with_ymd_and_hms(2025, 8, d, 0, 0, 0).single() {
            Some(ts) => ts,
            None => panic!("invalid test date"),
        }
    }

    #[rstest]
    fn empty_sequence_has_no_signal() {
        assert_eq!(posting_frequency(&[]), 0.0);
    }

    #[rstest]
    fn single_post_has_no_signal() {
        assert_eq!(posting_frequency(&[day(3)]), 0.0);
    }

    #[rstest]
    fn known_cadence_value() {
        // Four posts over six whole days: 1 / (1 + 6/4) = 0.4.
        let dates = [day(1), day(3), day(5), day(7)];
        let frequency = posting_frequency(&dates);
        assert!((frequency - 0.4).abs() < 1e-12);
    }

    #[rstest]
    fn same_day_posts_score_maximum_cadence() {
        let dates = [day(2), day(2), day(2)];
        assert_eq!(posting_frequency(&dates), 1.0);
    }

    #[rstest]
    fn denser_posting_scores_higher() {
        let dense = [day(1), day(2), day(3)];
        let sparse = [day(1), day(14), day(28)];
        assert!(posting_frequency(&dense) > posting_frequency(&sparse));
    }

    #[rstest]
    fn order_does_not_matter() {
        let sorted = [day(1), day(3), day(5)];
        let shuffled = [day(5), day(1), day(3)];
        assert_eq!(posting_frequency(&sorted), posting_frequency(&shuffled));
    }
}
