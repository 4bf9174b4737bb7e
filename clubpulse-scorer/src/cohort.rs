//! Cohort-level processing: scoring, normalisation, ranking, grouping.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use clubpulse_core::{
    ClubMetrics, ClubProfile, Event, ScoringPolicy, cluster_posts_into_events,
};

/// One club's scored output, the shape consumed by presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredClub {
    /// Display name of the club.
    pub name: String,
    /// Grouping category, never empty (`"uncategorized"` fallback applied).
    pub category: String,
    /// The assembled metrics the score was computed from.
    pub metrics: ClubMetrics,
    /// Activity events derived from the club's post dates.
    pub events: Vec<Event>,
    /// Raw final score (composite plus event bonus), unbounded above.
    pub composite_score: f64,
    /// Min-max normalised score in `0.0..=1.0`, relative to this cohort.
    pub normalized_score: f64,
}

/// Min-max rescale of raw cohort scores to `0.0..=1.0`, order-preserving.
///
/// An empty cohort yields an empty output. When every score ties (including
/// the single-club cohort) every output is `0.0` so a spread-less cohort
/// carries no spurious ranking signal.
///
/// # Examples
///
/// ```
/// use clubpulse_scorer::normalise_scores;
///
/// assert_eq!(normalise_scores(&[10.0, 20.0, 30.0]), vec![0.0, 0.5, 1.0]);
/// assert_eq!(normalise_scores(&[5.0, 5.0]), vec![0.0, 0.0]);
/// assert!(normalise_scores(&[]).is_empty());
/// ```
#[must_use]
pub fn normalise_scores(scores: &[f64]) -> Vec<f64> {
    let Some(min) = scores.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = scores.iter().copied().fold(min, f64::max);

    if min == max {
        return vec![0.0; scores.len()];
    }
    scores
        .iter()
        .map(|score| (score - min) / (max - min))
        .collect()
}

/// Score every club in the cohort and normalise across the run.
///
/// For each profile the collaborator snapshots are assembled into
/// [`ClubMetrics`], the post dates are clustered into events with the given
/// gap threshold, and the policy's final score is taken. Normalisation is a
/// barrier: it runs only once every raw score is known, and it preserves the
/// input order.
#[must_use]
pub fn score_cohort(
    cohort: &[ClubProfile],
    policy: &dyn ScoringPolicy,
    max_gap_days: u32,
) -> Vec<ScoredClub> {
    let mut scored: Vec<ScoredClub> = cohort
        .iter()
        .map(|profile| {
            let metrics = ClubMetrics::from_snapshots(
                profile.instagram.clone(),
                profile.whatsapp,
            );
            let events = cluster_posts_into_events(&metrics.post_dates, max_gap_days);
            let composite_score = policy.final_score(&metrics, &events);
            debug!(
                "scored club {:?}: raw={composite_score:.4}, events={}",
                profile.name,
                events.len()
            );
            ScoredClub {
                name: profile.name.clone(),
                category: profile.category_or_default().to_owned(),
                metrics,
                events,
                composite_score,
                normalized_score: 0.0,
            }
        })
        .collect();

    let raw: Vec<f64> = scored.iter().map(|club| club.composite_score).collect();
    for (club, normalised) in scored.iter_mut().zip(normalise_scores(&raw)) {
        club.normalized_score = normalised;
    }
    scored
}

/// Sort a scored cohort by normalised score, best first.
///
/// The sort is stable, so tied clubs keep their cohort order.
#[must_use]
pub fn rank(mut scored: Vec<ScoredClub>) -> Vec<ScoredClub> {
    scored.sort_by(|a, b| b.normalized_score.total_cmp(&a.normalized_score));
    scored
}

/// Aggregate view of one category of clubs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Names of the clubs in the category, in ranked order of appearance.
    pub clubs: Vec<String>,
    /// Mean normalised score across the category's clubs.
    pub mean_normalized_score: f64,
}

/// Partition scored clubs by category string.
///
/// A trivial key-based pass-through over the scored output; it consumes only
/// each club's normalised score for the category average.
#[must_use]
pub fn group_by_category(scored: &[ScoredClub]) -> BTreeMap<String, CategorySummary> {
    let mut groups: BTreeMap<String, Vec<&ScoredClub>> = BTreeMap::new();
    for club in scored {
        groups.entry(club.category.clone()).or_default().push(club);
    }

    groups
        .into_iter()
        .map(|(category, clubs)| {
            let total: f64 = clubs.iter().map(|club| club.normalized_score).sum();
            let summary = CategorySummary {
                clubs: clubs.iter().map(|club| club.name.clone()).collect(),
                mean_normalized_score: total / clubs.len() as f64,
            };
            (category, summary)
        })
        .collect()
}
