//! Resource matching
//!
//! Each concern lives in its own module:
//! - `geo`: haversine distance and travel time
//! - `load`: weighted occupancy score
//! - `ranking`: candidate ranking policy
//! - `alternatives`: fallback-class search when nothing matches
//! - `matcher`: the full pipeline

pub mod geo;
pub mod load;
pub mod ranking;
pub mod alternatives;
pub mod matcher;

pub use geo::{distance_km, haversine_km, travel_time_minutes};
pub use load::{load_score, LoadWeights};
pub use ranking::{DistanceTier, RankingFactors, RankingPolicy};
pub use alternatives::{find_alternatives, AlternativeOption};
pub use matcher::{match_providers, match_providers_with, rank_candidate, MatchResult, RankedCandidate};
