//! Classifier weights
//!
//! Per-field score deltas. The severity thresholds are fixed constants, not
//! part of this struct.

use serde::{Deserialize, Serialize};

/// Score at or above which a patient is CRITICAL
pub const CRITICAL_THRESHOLD: u32 = 15;

/// Score at or above which a patient is URGENT
pub const URGENT_THRESHOLD: u32 = 7;

/// Number of `low` tags tolerated before confidence drops to LOW
pub const MAX_LOW_TAGS: usize = 2;

/// Number of `high` tags needed for HIGH confidence
pub const MIN_HIGH_TAGS: usize = 4;

/// Additive score contribution of each positive finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassifierWeights {
    pub unconscious: u32,
    pub severe_bleeding: u32,
    pub severe_breathing: u32,
    pub mild_breathing: u32,
    pub chest_pain: u32,
    pub high_fever: u32,
    pub severe_trauma: u32,
    pub vulnerable_age: u32,
}

impl Default for ClassifierWeights {
    fn default() -> Self {
        Self {
            unconscious: 10,
            severe_bleeding: 9,
            severe_breathing: 8,
            mild_breathing: 3,
            chest_pain: 7,
            high_fever: 2,
            severe_trauma: 8,
            vulnerable_age: 2,
        }
    }
}

impl ClassifierWeights {
    /// Highest score these weights can produce, `None` if it overflows `u32`
    pub fn max_score(&self) -> Option<u32> {
        [
            self.severe_bleeding,
            self.severe_breathing.max(self.mild_breathing),
            self.chest_pain,
            self.high_fever,
            self.severe_trauma,
            self.vulnerable_age,
        ]
        .into_iter()
        .try_fold(self.unconscious, u32::checked_add)
    }
}
