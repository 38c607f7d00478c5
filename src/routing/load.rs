//! Provider load score
//!
//! Weighted bed occupancy across the three classes, 0-100, lower is better.
//! A class with zero total beds contributes nothing (not offered).

use serde::{Deserialize, Serialize};

use crate::data::WardBeds;
use crate::utils::round_score;

/// Weight of each class's occupancy in the load score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadWeights {
    pub icu: f64,
    pub oxygen: f64,
    pub general: f64,
}

impl Default for LoadWeights {
    fn default() -> Self {
        // ICU occupancy matters most
        Self {
            icu: 0.5,
            oxygen: 0.3,
            general: 0.2,
        }
    }
}

/// Weighted occupancy percentage, rounded to an integer in [0, 100]
pub fn load_score(beds: &WardBeds, weights: &LoadWeights) -> u32 {
    let weighted = weights.icu * beds.icu.occupancy_fraction()
        + weights.oxygen * beds.oxygen.occupancy_fraction()
        + weights.general * beds.general.occupancy_fraction();

    round_score(weighted * 100.0).clamp(0, 100) as u32
}
