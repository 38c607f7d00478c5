//! Triage Router
//!
//! Symptom-based severity classification and capacity-aware hospital matching.
//!
//! Module layout:
//! - `triage/`: questionnaire scoring, conflict detection, confidence
//! - `routing/`: distance, load, ranking, fallback-class search
//! - `data`: provider records and snapshot loading (JSON, CSV / Parquet with Polars)
//! - `store`: provider store (read snapshot, validated bed updates)
//! - `dashboard`: network-wide capacity statistics
//! - `router`: classify → ward → match coordinator
//! - `utils/`: rounding and serde helpers

pub mod types;
pub mod utils;
pub mod triage;
pub mod routing;
pub mod data;
pub mod store;
pub mod dashboard;
pub mod config;
pub mod router;

// Re-export commonly used types
pub use types::{
    AgeGroup, BreathingDifficulty, Confidence, Coordinate, ParseResourceClassError, ResourceClass,
    Severity, TriState,
};
pub use triage::{classify, required_resource_class, SymptomResponse, TriageResult};
pub use routing::{match_providers, AlternativeOption, MatchResult, RankedCandidate, RankingPolicy};
pub use data::{load_providers, BedCount, Provider, SiteLocation, WardBeds};
pub use store::{InMemoryStore, JsonFileStore, ProviderStore, StoreError};
pub use dashboard::CapacityDashboard;
pub use config::RouterConfig;
pub use router::{RoutingOutcome, TriageRequest, TriageRouter};
