//! Provider Store
//!
//! Read access to the current provider list plus the single write operation
//! the matcher never performs itself: setting one bed class's availability on
//! one provider. Writes are validated against that provider's current total.

use chrono::Utc;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::data::{load_providers_json, Provider};
use crate::types::ResourceClass;

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("provider '{0}' not found")]
    NotFound(String),

    #[error("provider '{id}': {class} availability {available} exceeds total capacity ({total})")]
    CapacityExceeded {
        id: String,
        class: ResourceClass,
        available: u32,
        total: u32,
    },

    #[error("duplicate provider id '{0}'")]
    DuplicateId(String),

    #[error("provider snapshot unavailable: {0}")]
    Unavailable(#[from] anyhow::Error),

    #[error("failed to write provider snapshot {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize provider snapshot")]
    Serialize(#[from] serde_json::Error),
}

/// Storage collaborator consumed by the router and the admin tooling
pub trait ProviderStore {
    /// Full provider list, in store order
    fn providers(&self) -> Result<Vec<Provider>, StoreError>;

    /// Single provider by id
    fn provider(&self, id: &str) -> Result<Provider, StoreError> {
        self.providers()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Set available beds for one class, stamping `last_updated`
    fn update_availability(
        &mut self,
        id: &str,
        class: ResourceClass,
        available: u32,
    ) -> Result<Provider, StoreError>;
}

/// Apply a validated availability change in place
fn apply_update(provider: &mut Provider, class: ResourceClass, available: u32) -> Result<(), StoreError> {
    let beds = provider.beds.get_mut(class);
    if available > beds.total {
        return Err(StoreError::CapacityExceeded {
            id: provider.id.clone(),
            class,
            available,
            total: beds.total,
        });
    }
    beds.available = available;
    provider.last_updated = Utc::now();
    Ok(())
}

/// In-memory store with an id index over an ordered list
#[derive(Debug, Default)]
pub struct InMemoryStore {
    providers: Vec<Provider>,
    index: FxHashMap<String, usize>,
}

impl InMemoryStore {
    pub fn new(providers: Vec<Provider>) -> Result<Self, StoreError> {
        let mut index = FxHashMap::default();
        for (position, provider) in providers.iter().enumerate() {
            provider.validate()?;
            if index.insert(provider.id.clone(), position).is_some() {
                return Err(StoreError::DuplicateId(provider.id.clone()));
            }
        }
        Ok(Self { providers, index })
    }
}

impl ProviderStore for InMemoryStore {
    fn providers(&self) -> Result<Vec<Provider>, StoreError> {
        Ok(self.providers.clone())
    }

    fn provider(&self, id: &str) -> Result<Provider, StoreError> {
        self.index
            .get(id)
            .map(|&position| self.providers[position].clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn update_availability(
        &mut self,
        id: &str,
        class: ResourceClass,
        available: u32,
    ) -> Result<Provider, StoreError> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let provider = &mut self.providers[position];
        apply_update(provider, class, available)?;
        tracing::info!("Updated {} availability for {} to {}", class, id, available);
        Ok(provider.clone())
    }
}

/// JSON file store in the `hospitals.json` layout
///
/// Each read re-parses and validates the file, so every request gets a fresh
/// snapshot. An update re-reads, validates against the on-disk total, then
/// replaces the file through a temporary sibling so readers never see a
/// partial write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn snapshot(&self) -> Result<Vec<Provider>, StoreError> {
        let providers = load_providers_json(&self.path)?;
        for provider in &providers {
            provider.validate()?;
        }
        Ok(providers)
    }

    fn save(&self, providers: &[Provider]) -> Result<(), StoreError> {
        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        serde_json::to_writer_pretty(&mut tmp, providers)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

impl ProviderStore for JsonFileStore {
    fn providers(&self) -> Result<Vec<Provider>, StoreError> {
        self.snapshot()
    }

    fn update_availability(
        &mut self,
        id: &str,
        class: ResourceClass,
        available: u32,
    ) -> Result<Provider, StoreError> {
        let mut providers = self.snapshot()?;

        let provider = providers
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        apply_update(provider, class, available)?;
        let updated = provider.clone();

        self.save(&providers)?;
        tracing::info!("Updated {} availability for {} to {} in {:?}", class, id, available, self.path);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BedCount, SiteLocation, WardBeds};

    fn provider(id: &str, icu: BedCount) -> Provider {
        Provider {
            id: id.to_string(),
            name: format!("Hospital {}", id),
            location: SiteLocation { lat: 0.0, lng: 0.0, address: None },
            beds: WardBeds {
                icu,
                oxygen: BedCount::new(1, 1),
                general: BedCount::new(1, 1),
            },
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_update_within_capacity() {
        let mut store = InMemoryStore::new(vec![provider("a", BedCount::new(1, 5))]).unwrap();
        let before = store.provider("a").unwrap().last_updated;

        let updated = store.update_availability("a", ResourceClass::Icu, 5).unwrap();
        assert_eq!(updated.beds.icu, BedCount::new(5, 5));
        assert!(updated.last_updated >= before);
        assert_eq!(store.provider("a").unwrap().beds.icu.available, 5);
    }

    #[test]
    fn test_update_over_capacity_is_rejected() {
        let mut store = InMemoryStore::new(vec![provider("a", BedCount::new(1, 5))]).unwrap();
        let err = store.update_availability("a", ResourceClass::Icu, 6).unwrap_err();
        assert!(matches!(err, StoreError::CapacityExceeded { total: 5, .. }));
        assert_eq!(store.provider("a").unwrap().beds.icu.available, 1);
    }

    #[test]
    fn test_unknown_provider() {
        let mut store = InMemoryStore::new(vec![provider("a", BedCount::new(1, 5))]).unwrap();
        assert!(matches!(store.provider("zzz"), Err(StoreError::NotFound(_))));
        assert!(matches!(
            store.update_availability("zzz", ResourceClass::General, 0),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_and_invalid_rejected_on_build() {
        let dup = InMemoryStore::new(vec![
            provider("a", BedCount::new(1, 5)),
            provider("a", BedCount::new(1, 5)),
        ]);
        assert!(matches!(dup, Err(StoreError::DuplicateId(_))));

        let overfull = InMemoryStore::new(vec![provider("b", BedCount::new(9, 5))]);
        assert!(matches!(overfull, Err(StoreError::CapacityExceeded { .. })));
    }
}
