//! Candidate ranking policy
//!
//! Higher is better. The score is a function of four factors only: distance
//! tier, available beds, load, and the critical-proximity bonus.

use serde::{Deserialize, Serialize};

use crate::routing::load::LoadWeights;
use crate::types::Severity;
use crate::utils::round_score;

/// Bonus for candidates within `max_km`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceTier {
    pub max_km: f64,
    pub bonus: f64,
}

/// Ranking weights. `Default` is the reference policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankingPolicy {
    /// Checked in order; first tier whose `max_km` covers the distance wins
    pub distance_tiers: Vec<DistanceTier>,
    /// Bonus beyond the last tier
    pub beyond_tiers_bonus: f64,
    pub bonus_per_available_bed: f64,
    pub max_availability_bonus: f64,
    /// `(100 - load) / load_divisor`
    pub load_divisor: f64,
    pub critical_bonus: f64,
    pub critical_max_travel_minutes: u32,
    pub load_weights: LoadWeights,
    /// Maximum number of fallbacks after the recommendation
    pub max_fallbacks: usize,
    /// Maximum number of alternative-class options
    pub max_alternatives: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            distance_tiers: vec![
                DistanceTier { max_km: 5.0, bonus: 30.0 },
                DistanceTier { max_km: 10.0, bonus: 20.0 },
                DistanceTier { max_km: 15.0, bonus: 10.0 },
            ],
            beyond_tiers_bonus: 5.0,
            bonus_per_available_bed: 5.0,
            max_availability_bonus: 30.0,
            load_divisor: 5.0,
            critical_bonus: 20.0,
            critical_max_travel_minutes: 15,
            load_weights: LoadWeights::default(),
            max_fallbacks: 2,
            max_alternatives: 2,
        }
    }
}

/// Inputs to the ranking score for one candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingFactors {
    pub distance_km: f64,
    pub travel_time_minutes: u32,
    pub available_beds: u32,
    pub load_score: u32,
    pub severity: Severity,
}

impl RankingPolicy {
    pub fn distance_bonus(&self, distance_km: f64) -> f64 {
        self.distance_tiers
            .iter()
            .find(|tier| distance_km <= tier.max_km)
            .map(|tier| tier.bonus)
            .unwrap_or(self.beyond_tiers_bonus)
    }

    /// Saturates once enough beds are free
    pub fn availability_bonus(&self, available_beds: u32) -> f64 {
        (available_beds as f64 * self.bonus_per_available_bed).min(self.max_availability_bonus)
    }

    /// Continuous, not tiered
    pub fn load_bonus(&self, load_score: u32) -> f64 {
        (100.0 - load_score as f64) / self.load_divisor
    }

    pub fn critical_proximity_bonus(&self, severity: Severity, travel_time_minutes: u32) -> f64 {
        if severity == Severity::Critical && travel_time_minutes <= self.critical_max_travel_minutes {
            self.critical_bonus
        } else {
            0.0
        }
    }

    /// Rounded ranking score
    pub fn score(&self, factors: &RankingFactors) -> i64 {
        let total = self.distance_bonus(factors.distance_km)
            + self.availability_bonus(factors.available_beds)
            + self.load_bonus(factors.load_score)
            + self.critical_proximity_bonus(factors.severity, factors.travel_time_minutes);

        round_score(total)
    }
}
