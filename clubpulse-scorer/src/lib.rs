//! Scoring for Clubpulse cohorts.
//!
//! The crate provides two complementary capabilities:
//! - **The default scoring policy** combines a club's Instagram engagement,
//!   WhatsApp activity, and posting cadence into one raw scalar using a
//!   weighted, `ln(1+x)`-dampened formula, then augments it with a bonus
//!   derived from the club's clustered activity events. It implements the
//!   [`ScoringPolicy`](clubpulse_core::ScoringPolicy) trait so callers can
//!   swap the formula without touching clustering or normalisation.
//! - **Cohort processing** scores every club in a run, rescales the raw
//!   scores to `0.0..=1.0` with an order-preserving min-max normalisation,
//!   ranks the clubs, and partitions them by category.
//!
//! # Examples
//!
//! ```
//! use clubpulse_core::ClubProfile;
//! use clubpulse_scorer::{LogDampenedPolicy, rank, score_cohort};
//!
//! let cohort = vec![ClubProfile {
//!     name: "Coding Club".into(),
//!     category: "Tech".into(),
//!     ..ClubProfile::default()
//! }];
//! let policy = LogDampenedPolicy::default();
//! let ranked = rank(score_cohort(&cohort, &policy, 14));
//! assert_eq!(ranked.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cohort;
mod policy;

pub use cohort::{
    CategorySummary, ScoredClub, group_by_category, normalise_scores, rank, score_cohort,
};
pub use policy::LogDampenedPolicy;
