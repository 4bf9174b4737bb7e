//! Gap-based segmentation of post timestamps into events.
//!
//! Posts are sorted chronologically and walked in order; whenever the
//! whole-day gap between two consecutive posts exceeds the configured
//! threshold, the current event closes and a new one opens. The gap check is
//! boundary-inclusive: posts exactly `max_gap_days` apart share an event.

use chrono::{DateTime, Utc};

use crate::Event;

/// Default quiet-gap threshold, in whole days, separating two events.
pub const DEFAULT_MAX_GAP_DAYS: u32 = 14;

/// Segment a club's post timestamps into chronologically ordered events.
///
/// The input may arrive in any order; it is sorted internally. An empty
/// input yields an empty event list, and any non-empty input yields at
/// least one event. The gap is always measured from the previous post in
/// sorted order, not from the event's start, so a long burst of closely
/// spaced posts stays a single event regardless of its total span.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use clubpulse_core::cluster_posts_into_events;
///
/// let dates = vec![
///     Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2025, 8, 5, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2025, 8, 25, 0, 0, 0).unwrap(),
/// ];
/// let events = cluster_posts_into_events(&dates, 14);
/// assert_eq!(events.len(), 2);
/// assert_eq!(events[0].num_posts(), 2);
/// ```
#[must_use]
pub fn cluster_posts_into_events(post_dates: &[DateTime<Utc>], max_gap_days: u32) -> Vec<Event> {
    let mut sorted = post_dates.to_vec();
    sorted.sort_unstable();

    let Some((&first, rest)) = sorted.split_first() else {
        return Vec::new();
    };

    let mut events = Vec::new();
    let mut current_start = first;
    let mut previous = first;
    let mut current_posts = 1_usize;

    for &date in rest {
        let gap_days = (date - previous).num_days();
        if gap_days <= i64::from(max_gap_days) {
            current_posts += 1;
        } else {
            events.push(Event::from_run(current_start, previous, current_posts));
            current_start = date;
            current_posts = 1;
        }
        previous = date;
    }

    // The in-progress event always closes at the final timestamp.
    events.push(Event::from_run(current_start, previous, current_posts));
    events
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
    fn empty_input_yields_no_events() {
        assert!(cluster_posts_into_events(&[], DEFAULT_MAX_GAP_DAYS).is_empty());
    }

    #[rstest]
    fn single_post_yields_single_event() {
        let events = cluster_posts_into_events(&[day(7)], DEFAULT_MAX_GAP_DAYS);
        assert_eq!(events.len(), 1);
        let event = events.first().map(Event::clone);
        let Some(event) = event else {
            panic!("expected one event");
        };
        assert_eq!(event.start_date(), day(7));
        assert_eq!(event.end_date(), day(7));
        assert_eq!(event.num_posts(), 1);
    }

    #[rstest]
    fn splits_on_gap_exceeding_threshold() {
        // Day 0, day 5, day 25: the 20-day gap exceeds 14 and splits.
        let dates = [day(1), day(6), day(26)];
        let events = cluster_posts_into_events(&dates, 14);
        assert_eq!(events.len(), 2);
        let counts: Vec<usize> = events.iter().map(Event::num_posts).collect();
        assert_eq!(counts, vec![2, 1]);
        let first = events.first().map(Event::clone);
        let Some(first) = first else {
            panic!("expected a first event");
        };
        assert_eq!(first.start_date(), day(1));
        assert_eq!(first.end_date(), day(6));
    }

    #[rstest]
    fn gap_at_threshold_merges() {
        // Exactly 14 days apart: boundary-inclusive, one event.
        let dates = [day(1), day(15)];
        let events = cluster_posts_into_events(&dates, 14);
        assert_eq!(events.len(), 1);
    }

    #[rstest]
    fn gap_one_past_threshold_splits() {
        let dates = [day(1), day(16)];
        let events = cluster_posts_into_events(&dates, 14);
        assert_eq!(events.len(), 2);
    }

    #[rstest]
    fn unsorted_input_is_sorted_internally() {
        let dates = [day(26), day(1), day(6)];
        let events = cluster_posts_into_events(&dates, 14);
        assert_eq!(events.len(), 2);
        let counts: Vec<usize> = events.iter().map(Event::num_posts).collect();
        assert_eq!(counts, vec![2, 1]);
    }

    #[rstest]
    fn gap_measured_from_previous_post_not_event_start() {
        // Each consecutive gap is 10 days, below the threshold, even though
        // the whole run spans 40 days.
        let dates = [day(1), day(11), day(21), day(31)];
        let events = cluster_posts_into_events(&dates, 14);
        assert_eq!(events.len(), 1);
        let total: usize = events.iter().map(Event::num_posts).sum();
        assert_eq!(total, dates.len());
    }
}
