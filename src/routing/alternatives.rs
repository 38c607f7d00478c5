//! Degraded-match alternatives
//!
//! Used only when no provider has a free bed of the required class anywhere.
//! Each required class maps to an ordered list of fallback classes; the steps
//! run in order until the option limit is reached. Options are ordered by raw
//! distance (tie: provider id), not by the ranking formula.

use serde::Serialize;
use smallvec::SmallVec;

use crate::data::Provider;
use crate::routing::geo::distance_km;
use crate::types::{Coordinate, ResourceClass};

/// Suggestion in a different resource class
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeOption {
    #[serde(flatten)]
    pub provider: Provider,
    pub distance_km: f64,
    pub available_beds: u32,
    #[serde(rename = "wardType")]
    pub alternative_resource_class: ResourceClass,
    pub note: String,
}

const ICU_FALLBACKS: &[ResourceClass] = &[ResourceClass::Oxygen, ResourceClass::General];
const OXYGEN_FALLBACKS: &[ResourceClass] = &[ResourceClass::General];

/// Classes to try, in order, when `required` has no capacity.
/// `None` means no alternative search is defined for that class.
pub fn fallback_classes(required: ResourceClass) -> Option<&'static [ResourceClass]> {
    match required {
        ResourceClass::Icu => Some(ICU_FALLBACKS),
        ResourceClass::Oxygen => Some(OXYGEN_FALLBACKS),
        ResourceClass::General => None,
    }
}

/// Note attached to an alternative of class `offered` for a patient who needed `required`
pub fn alternative_note(required: ResourceClass, offered: ResourceClass) -> String {
    let required = required.as_str().to_uppercase();
    match offered {
        ResourceClass::Oxygen => format!("{} not available - Oxygen bed alternative", required),
        ResourceClass::General => format!(
            "{} not available - General bed alternative (requires monitoring)",
            required
        ),
        ResourceClass::Icu => format!("{} not available - ICU bed alternative", required),
    }
}

/// Run the fallback pipeline for `required`
///
/// Returns `None` when no search is defined (general), otherwise up to
/// `limit` options, possibly empty.
pub fn find_alternatives(
    required: ResourceClass,
    location: Coordinate,
    providers: &[Provider],
    limit: usize,
) -> Option<Vec<AlternativeOption>> {
    let steps = fallback_classes(required)?;
    let mut collected: SmallVec<[AlternativeOption; 2]> = SmallVec::new();

    for &offered in steps {
        let remaining = limit.saturating_sub(collected.len());
        if remaining == 0 {
            break;
        }

        let mut step: Vec<AlternativeOption> = providers
            .iter()
            .filter(|p| p.beds.get(offered).has_capacity())
            .map(|p| AlternativeOption {
                provider: p.clone(),
                distance_km: distance_km(location, p.location.coordinate()),
                available_beds: p.beds.get(offered).available,
                alternative_resource_class: offered,
                note: alternative_note(required, offered),
            })
            .collect();

        step.sort_by(|a, b| {
            a.distance_km
                .total_cmp(&b.distance_km)
                .then_with(|| a.provider.id.cmp(&b.provider.id))
        });

        collected.extend(step.into_iter().take(remaining));
    }

    Some(collected.into_vec())
}
