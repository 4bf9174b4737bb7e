//! The default weighted, log-dampened scoring formula.

use clubpulse_core::{
    ClubMetrics, Event, ScoringPolicy, WeightSet, WeightSetError, posting_frequency,
};

/// Weighted composite scoring with `ln(1+x)` dampening of raw counts.
///
/// The dampening compresses heavy-tailed engagement counts so a single
/// high-follower club cannot dominate the ranking linearly. Per-post and
/// per-participant averages use floor-clamped denominators (`max(n, 1)`);
/// with zero posts this reports the raw sum as the average, which is
/// preserved behaviour rather than a division-by-zero guard bug.
///
/// # Examples
///
/// ```
/// use clubpulse_core::{ClubMetrics, ScoringPolicy};
/// use clubpulse_scorer::LogDampenedPolicy;
///
/// let policy = LogDampenedPolicy::default();
/// // All-zero metrics compose to an all-zero score: ln(1 + 0) = 0.
/// assert_eq!(policy.composite_score(&ClubMetrics::default()), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogDampenedPolicy {
    weights: WeightSet,
}

impl LogDampenedPolicy {
    /// Build a policy around an explicit weight set.
    ///
    /// # Errors
    /// Returns [`WeightSetError::InvalidWeight`] when any weight is
    /// negative, NaN, or infinite.
    pub fn new(weights: WeightSet) -> Result<Self, WeightSetError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// The weight set this policy applies.
    #[must_use]
    pub const fn weights(&self) -> WeightSet {
        self.weights
    }
}

/// Floor-clamp a denominator to one before dividing.
fn per(numerator: u64, denominator: u64) -> f64 {
    numerator as f64 / denominator.max(1) as f64
}

impl ScoringPolicy for LogDampenedPolicy {
    fn composite_score(&self, metrics: &ClubMetrics) -> f64 {
        let w = self.weights;

        let insta_engagement = per(metrics.likes_sum, metrics.num_posts).ln_1p()
            * w.avg_likes_per_post
            + per(metrics.comments_sum, metrics.num_posts).ln_1p() * w.avg_comments_per_post
            + (metrics.followers as f64).ln_1p() * w.followers_per_post;

        let whatsapp_activity = per(metrics.total_messages, metrics.num_participants).ln_1p()
            * w.avg_messages_per_participant;

        let frequency_score = posting_frequency(&metrics.post_dates) * w.posting_frequency;

        insta_engagement + whatsapp_activity + frequency_score
    }

    fn final_score(&self, metrics: &ClubMetrics, events: &[Event]) -> f64 {
        let base = self.composite_score(metrics);
        if events.is_empty() {
            return base;
        }

        let num_events = events.len();
        let total_posts: usize = events.iter().map(Event::num_posts).sum();
        let avg_posts_per_event = total_posts as f64 / num_events as f64;

        // Rewards clubs sustaining several distinct bursts with healthy post
        // density per burst; the dampening keeps both terms in check.
        let event_bonus = (num_events as f64).ln_1p() + avg_posts_per_event.ln_1p();

        base + event_bonus
    }
}
