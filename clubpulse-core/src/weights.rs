//! Relative weighting of the heterogeneous activity signals.

use thiserror::Error;

/// Tunable weights applied to each scoring signal.
///
/// The defaults sum to one, but no constraint is enforced on the sum:
/// callers may supply any non-negative finite values. Weights are an
/// explicit parameter of the scoring policy rather than ambient
/// configuration.
///
/// # Examples
///
/// ```
/// use clubpulse_core::WeightSet;
///
/// let weights = WeightSet::default();
/// assert!((weights.avg_likes_per_post - 0.3).abs() < f64::EPSILON);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeightSet {
    /// Weight of the log-dampened average likes per post.
    pub avg_likes_per_post: f64,
    /// Weight of the log-dampened average comments per post.
    pub avg_comments_per_post: f64,
    /// Weight of the log-dampened follower count.
    pub followers_per_post: f64,
    /// Weight of the log-dampened messages per chat participant.
    pub avg_messages_per_participant: f64,
    /// Weight of the posting-cadence estimate.
    pub posting_frequency: f64,
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            avg_likes_per_post: 0.3,
            avg_comments_per_post: 0.2,
            followers_per_post: 0.3,
            avg_messages_per_participant: 0.2,
            posting_frequency: 0.1,
        }
    }
}

/// Errors returned by [`WeightSet::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeightSetError {
    /// A weight was negative, NaN, or infinite.
    #[error("weights must be finite and non-negative")]
    InvalidWeight,
}

impl WeightSet {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightSetError::InvalidWeight`] when any weight is
    /// negative, NaN, or infinite.
    pub fn validate(self) -> Result<Self, WeightSetError> {
        if self.values().iter().all(|w| w.is_finite() && *w >= 0.0) {
            Ok(self)
        } else {
            Err(WeightSetError::InvalidWeight)
        }
    }

    const fn values(self) -> [f64; 5] {
        [
            self.avg_likes_per_post,
            self.avg_comments_per_post,
            self.followers_per_post,
            self.avg_messages_per_participant,
            self.posting_frequency,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_weights_sum_to_one() {
        let weights = WeightSet::default();
        let sum: f64 = weights.values().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[rstest]
    fn default_weights_are_valid() {
        assert!(WeightSet::default().validate().is_ok());
    }

    #[rstest]
    fn rejects_negative_weight() {
        let weights = WeightSet {
            followers_per_post: -0.1,
            ..WeightSet::default()
        };
        assert_eq!(weights.validate(), Err(WeightSetError::InvalidWeight));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_non_finite_weight(#[case] bad: f64) {
        let weights = WeightSet {
            posting_frequency: bad,
            ..WeightSet::default()
        };
        assert_eq!(weights.validate(), Err(WeightSetError::InvalidWeight));
    }

    #[rstest]
    fn accepts_unnormalised_weights() {
        let weights = WeightSet {
            avg_likes_per_post: 3.0,
            avg_comments_per_post: 2.0,
            followers_per_post: 3.0,
            avg_messages_per_participant: 2.0,
            posting_frequency: 1.0,
        };
        assert!(weights.validate().is_ok());
    }
}
