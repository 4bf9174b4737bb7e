//! Per-club activity records supplied by the collaborator layers.
//!
//! Each record defaults every field to zero (or empty) so that a partial
//! collaborator failure — a missed Instagram fetch, an unreadable chat
//! summary — degrades to a zero signal instead of crashing the pipeline.

use chrono::{DateTime, Utc};

/// Instagram engagement figures for one club, as delivered by the
/// acquisition collaborator.
///
/// A failed fetch is represented by [`InstagramSnapshot::default`], which is
/// all zeroes and an empty date list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InstagramSnapshot {
    /// Total posts on the profile.
    pub num_posts: u64,
    /// Likes summed across all posts.
    pub likes_sum: u64,
    /// Comments summed across all posts.
    pub comments_sum: u64,
    /// Follower count at fetch time.
    pub followers: u64,
    /// UTC timestamps of the posts, in any order.
    pub post_dates: Vec<DateTime<Utc>>,
}

/// WhatsApp chat summary for one club, as delivered by the chat-log
/// collaborator.
///
/// The first/last message dates are informational only; the scoring
/// formulas never consume them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WhatsappSnapshot {
    /// Messages counted in the chat export.
    pub total_messages: u64,
    /// Distinct senders seen in the chat export.
    pub num_participants: u64,
    /// Timestamp of the earliest message, when known.
    pub first_msg_date: Option<DateTime<Utc>>,
    /// Timestamp of the latest message, when known.
    pub last_msg_date: Option<DateTime<Utc>>,
}

/// The flat per-club record consumed by scoring.
///
/// Assembled in one shot from the collaborator snapshots; there is no
/// partially-initialised intermediate state.
///
/// # Examples
///
/// ```
/// use clubpulse_core::{ClubMetrics, InstagramSnapshot, WhatsappSnapshot};
///
/// let metrics = ClubMetrics::from_snapshots(
///     InstagramSnapshot::default(),
///     WhatsappSnapshot::default(),
/// );
/// assert_eq!(metrics.num_posts, 0);
/// assert!(metrics.post_dates.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClubMetrics {
    /// Total posts on the Instagram profile.
    pub num_posts: u64,
    /// Likes summed across all posts.
    pub likes_sum: u64,
    /// Comments summed across all posts.
    pub comments_sum: u64,
    /// Instagram follower count.
    pub followers: u64,
    /// Messages counted in the WhatsApp export.
    pub total_messages: u64,
    /// Distinct senders in the WhatsApp export.
    pub num_participants: u64,
    /// UTC timestamps of the Instagram posts, in any order.
    pub post_dates: Vec<DateTime<Utc>>,
}

impl ClubMetrics {
    /// Assemble the scoring record from both collaborator snapshots.
    #[must_use]
    pub fn from_snapshots(instagram: InstagramSnapshot, whatsapp: WhatsappSnapshot) -> Self {
        Self {
            num_posts: instagram.num_posts,
            likes_sum: instagram.likes_sum,
            comments_sum: instagram.comments_sum,
            followers: instagram.followers,
            total_messages: whatsapp.total_messages,
            num_participants: whatsapp.num_participants,
            post_dates: instagram.post_dates,
        }
    }
}

/// The unit of cohort input: a club's identity plus its two collaborator
/// snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClubProfile {
    /// Display name of the club.
    pub name: String,
    /// Category used for grouping; empty means uncategorized.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    /// Instagram engagement figures, zeroed when the fetch failed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub instagram: InstagramSnapshot,
    /// WhatsApp chat summary, zeroed when parsing failed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub whatsapp: WhatsappSnapshot,
}

impl ClubProfile {
    /// The club's grouping category, falling back to `"uncategorized"`.
    #[must_use]
    pub fn category_or_default(&self) -> &str {
        if self.category.is_empty() {
            "uncategorized"
        } else {
            &self.category
        }
    }
}
