//! RESOURCE MATCHER
//!
//! Ranks providers for one request from a point-in-time capacity snapshot.
//!
//! Pipeline:
//!   1. Annotate every provider with distance, travel time and load score
//!   2. Keep providers with a free bed of the required class
//!   3. Score each candidate (see `RankingPolicy`)
//!   4. Sort by score descending, provider id ascending on ties
//!   5. If nothing is left, search fallback classes instead
//!
//! Pure over its inputs: the snapshot is borrowed and never modified.

use serde::Serialize;

use crate::data::Provider;
use crate::routing::alternatives::{find_alternatives, AlternativeOption};
use crate::routing::geo::{haversine_km, travel_time_minutes};
use crate::routing::load::load_score;
use crate::routing::ranking::{RankingFactors, RankingPolicy};
use crate::types::{Coordinate, ResourceClass, Severity};
use crate::utils::round_to_tenth;

/// Provider annotated for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub provider: Provider,
    pub distance_km: f64,
    pub travel_time_minutes: u32,
    pub load_score: u32,
    pub available_beds: u32,
    pub required_ward_type: ResourceClass,
    pub ranking_score: i64,
}

/// Matcher output for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub has_capacity: bool,
    pub recommended: Option<RankedCandidate>,
    pub fallbacks: Vec<RankedCandidate>,
    pub total_providers_checked: usize,
    pub providers_with_capacity: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_options: Option<Vec<AlternativeOption>>,
}

impl MatchResult {
    /// Recommended candidate followed by the fallbacks
    pub fn ranked(&self) -> impl Iterator<Item = &RankedCandidate> {
        self.recommended.iter().chain(self.fallbacks.iter())
    }
}

/// Match with the reference ranking policy
pub fn match_providers(
    required: ResourceClass,
    location: Coordinate,
    providers: &[Provider],
    severity: Severity,
) -> MatchResult {
    match_providers_with(required, location, providers, severity, &RankingPolicy::default())
}

/// Match with a caller-supplied ranking policy
pub fn match_providers_with(
    required: ResourceClass,
    location: Coordinate,
    providers: &[Provider],
    severity: Severity,
    policy: &RankingPolicy,
) -> MatchResult {
    let mut candidates: Vec<RankedCandidate> = providers
        .iter()
        .filter(|p| p.beds.get(required).has_capacity())
        .map(|p| rank_candidate(p, required, location, severity, policy))
        .collect();

    candidates.sort_by(|a, b| {
        b.ranking_score
            .cmp(&a.ranking_score)
            .then_with(|| a.provider.id.cmp(&b.provider.id))
    });

    let providers_with_capacity = candidates.len();
    let has_capacity = providers_with_capacity > 0;

    let alternative_options = if has_capacity {
        None
    } else {
        tracing::warn!(
            "No {} capacity across {} providers; searching alternative wards",
            required,
            providers.len()
        );
        find_alternatives(required, location, providers, policy.max_alternatives)
    };

    let mut ranked = candidates.into_iter();
    let recommended = ranked.next();
    let fallbacks: Vec<RankedCandidate> = ranked.take(policy.max_fallbacks).collect();

    MatchResult {
        has_capacity,
        recommended,
        fallbacks,
        total_providers_checked: providers.len(),
        providers_with_capacity,
        alternative_options,
    }
}

/// Annotate and score a single provider for `required`
pub fn rank_candidate(
    provider: &Provider,
    required: ResourceClass,
    location: Coordinate,
    severity: Severity,
    policy: &RankingPolicy,
) -> RankedCandidate {
    // Travel time uses the unrounded distance; the tier and the report use the rounded one
    let raw_distance = haversine_km(location, provider.location.coordinate());
    let distance = round_to_tenth(raw_distance);
    let travel_time = travel_time_minutes(raw_distance);
    let load = load_score(&provider.beds, &policy.load_weights);
    let available_beds = provider.beds.get(required).available;

    let ranking_score = policy.score(&RankingFactors {
        distance_km: distance,
        travel_time_minutes: travel_time,
        available_beds,
        load_score: load,
        severity,
    });

    RankedCandidate {
        provider: provider.clone(),
        distance_km: distance,
        travel_time_minutes: travel_time,
        load_score: load,
        available_beds,
        required_ward_type: required,
        ranking_score,
    }
}
