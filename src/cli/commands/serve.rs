//! Run the HTTP API server

use anyhow::Context;

use roster::adapters::AnyCatalog;
use roster::config::Config;
use roster::core::services::RosterService;
use roster::server::tiny_http;

/// Serve the roster API until the process is stopped
pub fn serve(config: &Config) -> anyhow::Result<()> {
    let client = AnyCatalog::from_config(&config.catalog)?;
    log::info!("catalog source: {}", client.source());
    let service = RosterService::new(client);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    let addr = config.server.addr();
    let server = tiny_http::bind(&addr)?;
    let bound = server.server_addr().to_ip().map_or(addr, |a| a.to_string());

    println!("Starting roster API...");
    println!("Listening on http://{bound}/api");
    println!();
    println!("Press Ctrl+C to stop");

    tiny_http::serve(&server, &service, runtime.handle());
    Ok(())
}
