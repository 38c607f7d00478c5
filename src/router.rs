//! Triage Router - Main coordinator
//!
//! Classify → derive required ward → match against the provider snapshot.
//! Includes both sequential and parallel (Rayon) batch entry points. The
//! snapshot is borrowed immutably, so one snapshot can serve many requests
//! at once.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::RouterConfig;
use crate::data::Provider;
use crate::routing::{match_providers_with, MatchResult};
use crate::store::{ProviderStore, StoreError};
use crate::triage::{classify_with, required_resource_class, SymptomResponse, TriageResult};
use crate::types::{Coordinate, ResourceClass};

/// One validated triage request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageRequest {
    pub responses: SymptomResponse,
    pub patient_location: Coordinate,
}

/// Combined classifier and matcher output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingOutcome {
    pub triage: TriageResult,
    pub required_ward: ResourceClass,
    pub routing: MatchResult,
    pub timestamp: DateTime<Utc>,
}

/// Main router
#[derive(Debug, Clone, Default)]
pub struct TriageRouter {
    config: RouterConfig,
}

impl TriageRouter {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Route one request against a snapshot
    pub fn route(&self, request: &TriageRequest, providers: &[Provider]) -> RoutingOutcome {
        let triage = classify_with(&request.responses, &self.config.classifier);
        let required_ward = required_resource_class(triage.severity);

        if triage.requires_human_review() {
            tracing::warn!(
                "Triage flagged for human review ({} confidence, {} conflicting signals)",
                triage.confidence,
                triage.conflicting_signals.len()
            );
        }

        let routing = match_providers_with(
            required_ward,
            request.patient_location,
            providers,
            triage.severity,
            &self.config.ranking,
        );

        tracing::debug!(
            "Routed {} patient (score {}) to {} ward: {} of {} providers with capacity, recommended {:?}",
            triage.severity,
            triage.score,
            required_ward,
            routing.providers_with_capacity,
            routing.total_providers_checked,
            routing.recommended.as_ref().map(|c| c.provider.id.as_str())
        );

        RoutingOutcome {
            triage,
            required_ward,
            routing,
            timestamp: Utc::now(),
        }
    }

    /// Take a fresh snapshot from the store, then route
    pub fn route_with_store<S: ProviderStore + ?Sized>(
        &self,
        request: &TriageRequest,
        store: &S,
    ) -> Result<RoutingOutcome, StoreError> {
        let providers = store.providers()?;
        Ok(self.route(request, &providers))
    }

    /// Route many requests sequentially against the same snapshot
    pub fn route_batch(&self, requests: &[TriageRequest], providers: &[Provider]) -> Vec<RoutingOutcome> {
        requests.iter().map(|r| self.route(r, providers)).collect()
    }

    /// Route many requests IN PARALLEL against the same snapshot
    ///
    /// Output order matches input order.
    pub fn route_batch_parallel(&self, requests: &[TriageRequest], providers: &[Provider]) -> Vec<RoutingOutcome> {
        tracing::info!(
            "Routing batch of {} requests over {} providers",
            requests.len(),
            providers.len()
        );
        requests.par_iter().map(|r| self.route(r, providers)).collect()
    }
}
