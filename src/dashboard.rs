//! Capacity Dashboard
//!
//! Network-wide capacity statistics for administrators: bed totals per class,
//! providers ordered by occupancy, and providers at critical capacity.

use serde::Serialize;

use crate::data::{BedCount, Provider, WardBeds};
use crate::types::ResourceClass;
use crate::utils::round_to_tenth;

/// ICU occupancy (%) above which a provider is critical on its own
pub const CRITICAL_ICU_OCCUPANCY: f64 = 90.0;

/// Occupancy (%) above which a provider is critical when every class exceeds it
pub const CRITICAL_ALL_CLASS_OCCUPANCY: f64 = 80.0;

/// Per-provider occupancy percentages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderLoad {
    pub id: String,
    pub name: String,
    pub icu_occupancy: f64,
    pub oxygen_occupancy: f64,
    pub general_occupancy: f64,
    pub overall_occupancy: f64,
}

impl ProviderLoad {
    fn from_provider(provider: &Provider) -> Self {
        let icu = occupancy_percent(&provider.beds.icu);
        let oxygen = occupancy_percent(&provider.beds.oxygen);
        let general = occupancy_percent(&provider.beds.general);

        Self {
            id: provider.id.clone(),
            name: provider.name.clone(),
            icu_occupancy: icu,
            oxygen_occupancy: oxygen,
            general_occupancy: general,
            overall_occupancy: round_to_tenth((icu + oxygen + general) / 3.0),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.icu_occupancy > CRITICAL_ICU_OCCUPANCY
            || (self.icu_occupancy > CRITICAL_ALL_CLASS_OCCUPANCY
                && self.oxygen_occupancy > CRITICAL_ALL_CLASS_OCCUPANCY
                && self.general_occupancy > CRITICAL_ALL_CLASS_OCCUPANCY)
    }
}

/// Provider flagged at critical capacity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalProvider {
    pub id: String,
    pub name: String,
    pub icu_available: u32,
    pub oxygen_available: u32,
    pub general_available: u32,
}

/// Aggregate view over one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityDashboard {
    pub total_providers: usize,
    pub total_beds: WardBeds,
    /// Most occupied first
    pub providers_by_load: Vec<ProviderLoad>,
    pub critical_capacity_providers: Vec<CriticalProvider>,
}

impl CapacityDashboard {
    pub fn from_providers(providers: &[Provider]) -> Self {
        let mut total_beds = WardBeds::default();
        let mut providers_by_load = Vec::with_capacity(providers.len());
        let mut critical_capacity_providers = Vec::new();

        for provider in providers {
            for class in ResourceClass::ALL {
                let beds = provider.beds.get(class);
                let total = total_beds.get_mut(class);
                total.available += beds.available;
                total.total += beds.total;
            }

            let load = ProviderLoad::from_provider(provider);
            if load.is_critical() {
                critical_capacity_providers.push(CriticalProvider {
                    id: provider.id.clone(),
                    name: provider.name.clone(),
                    icu_available: provider.beds.icu.available,
                    oxygen_available: provider.beds.oxygen.available,
                    general_available: provider.beds.general.available,
                });
            }
            providers_by_load.push(load);
        }

        providers_by_load.sort_by(|a, b| {
            b.overall_occupancy
                .total_cmp(&a.overall_occupancy)
                .then_with(|| a.id.cmp(&b.id))
        });

        tracing::debug!(
            "Dashboard over {} providers: {} at critical capacity",
            providers.len(),
            critical_capacity_providers.len()
        );

        Self {
            total_providers: providers.len(),
            total_beds,
            providers_by_load,
            critical_capacity_providers,
        }
    }
}

/// Occupancy percentage rounded to one decimal; 0 when the class is not offered
pub fn occupancy_percent(beds: &BedCount) -> f64 {
    round_to_tenth(beds.occupancy_fraction() * 100.0)
}
