//! Router configuration
//!
//! Policy weights for the classifier and the matcher. Every field is optional
//! in the JSON file; omitted fields keep the reference values. Keys are
//! camelCase like the rest of the wire formats.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::routing::RankingPolicy;
use crate::triage::ClassifierWeights;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub classifier: ClassifierWeights,
    pub ranking: RankingPolicy,
}

impl RouterConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read router config: {:?}", path))?;

        let config: RouterConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse router config JSON")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject policies the matcher cannot evaluate
    pub fn validate(&self) -> Result<()> {
        if self.classifier.max_score().is_none() {
            anyhow::bail!("classifier weights overflow the score range");
        }

        let ranking = &self.ranking;
        // Also rejects NaN
        if !(ranking.load_divisor > 0.0) {
            anyhow::bail!("ranking.loadDivisor must be positive, got {}", ranking.load_divisor);
        }
        if ranking
            .distance_tiers
            .windows(2)
            .any(|pair| pair[0].max_km > pair[1].max_km)
        {
            anyhow::bail!("ranking.distanceTiers must be sorted by maxKm");
        }
        let weights = &ranking.load_weights;
        if weights.icu < 0.0 || weights.oxygen < 0.0 || weights.general < 0.0 {
            anyhow::bail!("ranking.loadWeights must be non-negative");
        }
        Ok(())
    }
}
