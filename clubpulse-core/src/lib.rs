//! Core domain types for the Clubpulse engine.
//!
//! These models provide basic validation to keep downstream components
//! honest: derived entities such as [`Event`] can only be constructed in a
//! consistent state, while input records such as [`ClubMetrics`] default
//! every absent signal to zero so partial collaborator failures never crash
//! the scoring pipeline.
//!
//! The crate also hosts the pure signal derivations that feed scoring — the
//! gap-based event clusterer and the posting-frequency estimator — and the
//! [`ScoringPolicy`] trait behind which the actual scoring formula lives.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cluster;
mod event;
mod frequency;
mod metrics;
mod policy;
mod weights;

pub use cluster::{DEFAULT_MAX_GAP_DAYS, cluster_posts_into_events};
pub use event::{Event, EventError};
pub use frequency::posting_frequency;
pub use metrics::{ClubMetrics, ClubProfile, InstagramSnapshot, WhatsappSnapshot};
pub use policy::ScoringPolicy;
pub use weights::{WeightSet, WeightSetError};
