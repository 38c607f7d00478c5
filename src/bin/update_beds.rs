// Update bed availability for one provider
//
// Purpose: Admin write path; validates against the provider's total capacity
// Usage: cargo run --features cli --bin update_beds -- <provider_id> <icu|oxygen|general> <available>

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage_router_rust::{JsonFileStore, ProviderStore, ResourceClass};

const USAGE: &str = "Usage: update_beds <provider_id> <icu|oxygen|general> <available>";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "triage_router_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [id, bed_type, available] = args.as_slice() else {
        anyhow::bail!(USAGE);
    };

    let class: ResourceClass = bed_type.parse()?;
    let available: u32 = available
        .parse()
        .with_context(|| format!("Available beds must be a non-negative integer, got '{}'", available))?;

    let providers_path = std::env::var("PROVIDERS_PATH")
        .unwrap_or_else(|_| "data/providers.json".to_string());

    let mut store = JsonFileStore::new(providers_path);
    let updated = store.update_availability(id, class, available)?;

    println!("{}", serde_json::to_string_pretty(&updated)?);
    Ok(())
}
