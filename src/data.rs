//! Provider Data Loading
//!
//! Provider (hospital) records and the snapshot loaders that feed the matcher.
//! JSON snapshots use the nested `hospitals.json` layout; tabular snapshots
//! (CSV / Parquet) are read with Polars and use one flat row per provider.
//!
//! Every loaded provider is validated: `available <= total` for each bed class.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::store::StoreError;
use crate::types::{Coordinate, ResourceClass};

/// Availability of one bed class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BedCount {
    pub available: u32,
    pub total: u32,
}

impl BedCount {
    pub fn new(available: u32, total: u32) -> Self {
        Self { available, total }
    }

    /// Fraction of beds in use. A class with no beds at all is treated as not
    /// offered and reports zero occupancy.
    pub fn occupancy_fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let occupied = self.total.saturating_sub(self.available);
        occupied as f64 / self.total as f64
    }

    pub fn has_capacity(&self) -> bool {
        self.available > 0
    }
}

/// Bed availability per resource class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WardBeds {
    pub icu: BedCount,
    pub oxygen: BedCount,
    pub general: BedCount,
}

impl WardBeds {
    pub fn get(&self, class: ResourceClass) -> &BedCount {
        match class {
            ResourceClass::Icu => &self.icu,
            ResourceClass::Oxygen => &self.oxygen,
            ResourceClass::General => &self.general,
        }
    }

    pub fn get_mut(&mut self, class: ResourceClass) -> &mut BedCount {
        match class {
            ResourceClass::Icu => &mut self.icu,
            ResourceClass::Oxygen => &mut self.oxygen,
            ResourceClass::General => &mut self.general,
        }
    }
}

/// Provider site: coordinates plus an optional street address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteLocation {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl SiteLocation {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// A resource provider (hospital). Read-only to the matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub location: SiteLocation,
    pub beds: WardBeds,
    pub last_updated: DateTime<Utc>,
}

impl Provider {
    /// Check `available <= total` for every bed class
    pub fn validate(&self) -> Result<(), StoreError> {
        for class in ResourceClass::ALL {
            let beds = self.beds.get(class);
            if beds.available > beds.total {
                return Err(StoreError::CapacityExceeded {
                    id: self.id.clone(),
                    class,
                    available: beds.available,
                    total: beds.total,
                });
            }
        }
        Ok(())
    }
}

/// Load a provider snapshot, picking the reader from the file extension
///
/// `.csv` and `.parquet` go through Polars; anything else is read as JSON.
pub fn load_providers(path: &Path) -> Result<Vec<Provider>> {
    let providers = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_providers_csv(path)?,
        Some("parquet") => load_providers_parquet(path)?,
        _ => load_providers_json(path)?,
    };

    for provider in &providers {
        provider
            .validate()
            .with_context(|| format!("Invalid provider in snapshot {:?}", path))?;
    }

    tracing::info!("Loaded {} providers from {:?}", providers.len(), path);
    Ok(providers)
}

/// Parse a JSON provider array
pub fn load_providers_json(path: &Path) -> Result<Vec<Provider>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read provider snapshot: {:?}", path))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse provider snapshot JSON: {:?}", path))
}

/// Load a flat CSV provider table
pub fn load_providers_csv(path: &Path) -> Result<Vec<Provider>> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))
        .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
        .finish()
        .with_context(|| format!("Failed to load provider CSV: {:?}", path))?;

    providers_from_frame(&df)
}

/// Load a flat Parquet provider table
pub fn load_providers_parquet(path: &Path) -> Result<Vec<Provider>> {
    let df = LazyFrame::scan_parquet(path, Default::default())
        .with_context(|| format!("Failed to scan parquet: {:?}", path))?
        .collect()
        .with_context(|| format!("Failed to load provider parquet: {:?}", path))?;

    providers_from_frame(&df)
}

/// Bed columns in table order: (class, available column, total column)
const BED_COLUMNS: [(ResourceClass, &str, &str); 3] = [
    (ResourceClass::Icu, "icu_available", "icu_total"),
    (ResourceClass::Oxygen, "oxygen_available", "oxygen_total"),
    (ResourceClass::General, "general_available", "general_total"),
];

/// Convert a flat provider table into records
///
/// Required columns: id, name, lat, lng and the six bed columns.
/// Optional: address, last_updated (RFC 3339; defaults to load time).
pub fn providers_from_frame(df: &DataFrame) -> Result<Vec<Provider>> {
    let ids = string_column(df, "id")?;
    let names = string_column(df, "name")?;
    let lats = float_column(df, "lat")?;
    let lngs = float_column(df, "lng")?;

    let mut bed_columns = Vec::with_capacity(BED_COLUMNS.len());
    for (class, available_col, total_col) in BED_COLUMNS {
        bed_columns.push((class, count_column(df, available_col)?, count_column(df, total_col)?));
    }

    let addresses = df.column("address").ok().and_then(|c| c.str().ok().cloned());
    let timestamps = df.column("last_updated").ok().and_then(|c| c.str().ok().cloned());
    let loaded_at = Utc::now();

    let mut providers = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let id = ids
            .get(idx)
            .with_context(|| format!("Row {}: missing id", idx))?
            .to_string();

        let mut beds = WardBeds::default();
        for (class, available, total) in &bed_columns {
            let available = available
                .get(idx)
                .with_context(|| format!("Provider {}: missing or negative {} availability", id, class))?;
            let total = total
                .get(idx)
                .with_context(|| format!("Provider {}: missing or negative {} total", id, class))?;
            *beds.get_mut(*class) = BedCount::new(available, total);
        }

        let last_updated = match timestamps.as_ref().and_then(|t| t.get(idx)) {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Provider {}: invalid last_updated '{}'", id, raw))?
                .with_timezone(&Utc),
            None => loaded_at,
        };

        providers.push(Provider {
            name: names.get(idx).unwrap_or_default().to_string(),
            location: SiteLocation {
                lat: lats.get(idx).with_context(|| format!("Provider {}: missing lat", id))?,
                lng: lngs.get(idx).with_context(|| format!("Provider {}: missing lng", id))?,
                address: addresses
                    .as_ref()
                    .and_then(|a| a.get(idx))
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            },
            beds,
            last_updated,
            id,
        });
    }

    Ok(providers)
}

fn string_column(df: &DataFrame, name: &str) -> Result<StringChunked> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::String)
        .with_context(|| format!("Column '{}' is not string-like", name))?;

    Ok(column
        .str()
        .with_context(|| format!("Column '{}' is not string type", name))?
        .clone())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' is not numeric", name))?;

    Ok(column
        .f64()
        .with_context(|| format!("Column '{}' is not f64 type", name))?
        .clone())
}

/// Bed counts; negative values become null under the cast and are rejected
/// per row.
fn count_column(df: &DataFrame, name: &str) -> Result<UInt32Chunked> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::UInt32)
        .with_context(|| format!("Column '{}' is not an integer count", name))?;

    Ok(column
        .u32()
        .with_context(|| format!("Column '{}' is not u32 type", name))?
        .clone())
}
