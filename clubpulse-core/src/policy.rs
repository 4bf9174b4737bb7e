//! Score clubs from their assembled metrics.
//!
//! The `ScoringPolicy` trait assigns raw scores to a club given its
//! [`ClubMetrics`](crate::ClubMetrics) and, for the final score, the
//! [`Event`](crate::Event) list derived from its post dates. The whole
//! formula lives behind this seam so alternative scoring strategies can be
//! swapped without touching clustering or cohort normalisation.

use crate::{ClubMetrics, Event};

/// Calculate raw activity scores for a club.
///
/// Higher scores indicate more engagement and activity. Implementations
/// must be thread-safe (`Send` + `Sync`) so cohorts can be scored across
/// threads, and must be pure: identical inputs yield identical outputs.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values for contract-conforming inputs.
/// - Never fail: degenerate inputs (zero posts, zero participants, empty
///   date lists) map to defined fallback values, not errors.
///
/// # Examples
///
/// ```
/// use clubpulse_core::{ClubMetrics, Event, ScoringPolicy};
///
/// struct UnitPolicy;
///
/// impl ScoringPolicy for UnitPolicy {
///     fn composite_score(&self, _metrics: &ClubMetrics) -> f64 {
///         1.0
///     }
///
///     fn final_score(&self, metrics: &ClubMetrics, _events: &[Event]) -> f64 {
///         self.composite_score(metrics)
///     }
/// }
///
/// let metrics = ClubMetrics::default();
/// assert_eq!(UnitPolicy.final_score(&metrics, &[]), 1.0);
/// ```
pub trait ScoringPolicy: Send + Sync {
    /// Combine the club's raw signals into one scalar, before any
    /// event-derived bonus.
    fn composite_score(&self, metrics: &ClubMetrics) -> f64;

    /// The club's final raw score: the composite augmented by whatever
    /// bonus the policy derives from the clustered events.
    fn final_score(&self, metrics: &ClubMetrics, events: &[Event]) -> f64;
}
