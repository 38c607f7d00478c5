// Capacity dashboard over the current provider snapshot
//
// Purpose: Print bed totals, providers by occupancy and critical-capacity flags
// Usage: cargo run --features cli --bin capacity_dashboard

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage_router_rust::{load_providers, CapacityDashboard};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "triage_router_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let providers_path = std::env::var("PROVIDERS_PATH")
        .unwrap_or_else(|_| "data/providers.json".to_string());

    let providers = load_providers(Path::new(&providers_path))?;
    let dashboard = CapacityDashboard::from_providers(&providers);

    if !dashboard.critical_capacity_providers.is_empty() {
        tracing::warn!(
            "{} providers at critical capacity",
            dashboard.critical_capacity_providers.len()
        );
    }

    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
