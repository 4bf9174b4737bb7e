//! Facade crate for the Clubpulse scoring engine.
//!
//! This crate re-exports the core domain types together with the default
//! log-dampened scoring policy and the cohort pipeline.

#![forbid(unsafe_code)]

pub use clubpulse_core::{
    ClubMetrics, ClubProfile, DEFAULT_MAX_GAP_DAYS, Event, EventError, InstagramSnapshot,
    ScoringPolicy, WeightSet, WeightSetError, WhatsappSnapshot, cluster_posts_into_events,
    posting_frequency,
};

pub use clubpulse_scorer::{
    CategorySummary, LogDampenedPolicy, ScoredClub, group_by_category, normalise_scores, rank,
    score_cohort,
};
