//! Fetch and print the catalog

use anyhow::Context;

use roster::adapters::AnyCatalog;
use roster::config::CatalogConfig;
use roster::core::services::RosterService;
use roster::output::{CatalogResult, OutputMode};

/// Fetch the configured catalog once and print it
pub fn catalog(config: &CatalogConfig, mode: OutputMode) -> anyhow::Result<()> {
    let client = AnyCatalog::from_config(config)?;
    let source = client.source();
    let service = RosterService::new(client);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let items = runtime
        .block_on(service.get_catalog())
        .with_context(|| format!("Failed to fetch catalog from {source}"))?;

    CatalogResult::new(source.to_string(), items).render(mode);
    Ok(())
}
