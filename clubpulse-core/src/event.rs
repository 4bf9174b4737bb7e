//! A temporally contiguous burst of posting activity.
//!
//! Events are derived from a club's post timestamps by the clusterer in
//! [`crate::cluster_posts_into_events`]; they are immutable once created.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// A cluster of posts separated from neighbouring clusters by a quiet gap.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use clubpulse_core::Event;
///
/// # fn main() -> Result<(), clubpulse_core::EventError> {
/// let start = Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();
/// let event = Event::new(start, start, 1)?;
/// assert_eq!(event.num_posts(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawEvent"))]
pub struct Event {
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    num_posts: usize,
}

/// Unvalidated wire shape; deserialisation routes through [`Event::new`] so
/// decoded events uphold the same invariants as constructed ones.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawEvent {
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    num_posts: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEvent> for Event {
    type Error = EventError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        Self::new(raw.start_date, raw.end_date, raw.num_posts)
    }
}

/// Errors returned by [`Event::new`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The event would contain no posts.
    #[error("an event must contain at least one post")]
    EmptyEvent,
    /// The start timestamp is later than the end timestamp.
    #[error("event start must not be after its end")]
    InvertedRange,
}

impl Event {
    /// Validates and constructs an [`Event`].
    ///
    /// # Errors
    /// Returns [`EventError::EmptyEvent`] when `num_posts` is zero and
    /// [`EventError::InvertedRange`] when `start_date > end_date`.
    pub fn new(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        num_posts: usize,
    ) -> Result<Self, EventError> {
        if num_posts == 0 {
            return Err(EventError::EmptyEvent);
        }
        if start_date > end_date {
            return Err(EventError::InvertedRange);
        }
        Ok(Self {
            start_date,
            end_date,
            num_posts,
        })
    }

    /// Construct an event from a run of sorted timestamps.
    ///
    /// The clusterer only calls this with `start <= end` and a positive
    /// count, so the invariants hold by construction.
    pub(crate) const fn from_run(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        num_posts: usize,
    ) -> Self {
        Self {
            start_date,
            end_date,
            num_posts,
        }
    }

    /// Timestamp of the first post in the cluster.
    #[must_use]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Timestamp of the last post in the cluster.
    #[must_use]
    pub const fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Number of posts in the cluster; always at least one.
    #[must_use]
    pub const fn num_posts(&self) -> usize {
        self.num_posts
    }
}
