// Route a single triage request against the current provider snapshot
//
// Purpose: Classify a patient and print ranked hospital recommendations as JSON
// Usage: cargo run --features cli --bin route_patient -- request.json

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage_router_rust::{load_providers, RouterConfig, TriageRequest, TriageRouter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "triage_router_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let request_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: route_patient <request.json>")?;

    // Configuration from environment variables
    let providers_path = std::env::var("PROVIDERS_PATH")
        .unwrap_or_else(|_| "data/providers.json".to_string());

    let config = match std::env::var("ROUTER_CONFIG") {
        Ok(path) => RouterConfig::load(Path::new(&path))?,
        Err(_) => RouterConfig::default(),
    };

    tracing::info!("PROVIDERS_PATH: {}", providers_path);

    let request_json = std::fs::read_to_string(&request_path)
        .with_context(|| format!("Failed to read request: {:?}", request_path))?;
    let request: TriageRequest = serde_json::from_str(&request_json)
        .with_context(|| "Request must contain 'responses' and 'patientLocation'")?;

    let providers = load_providers(Path::new(&providers_path))?;
    let outcome = TriageRouter::new(config).route(&request, &providers);

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
