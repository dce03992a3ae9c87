//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use roster::adapters::CatalogSource;
use roster::config::Config;
use roster::output::OutputMode;

/// roster - Per-user team rosters over a remote catalog
#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Per-user team rosters over a remote catalog",
    long_about = "Serve per-user rosters of up to six catalog items.\n\n\
                  Items are fetched from PokeAPI or a local JSON file.\n\
                  Rosters live in memory for the lifetime of the server."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to $ROSTER_CONFIG or ~/.roster/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch and print the catalog
    Catalog {
        /// Catalog source: pokeapi, file
        #[arg(short, long)]
        source: Option<CatalogSource>,

        /// Catalog file (implies --source file)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Number of items to fetch from PokeAPI
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Run the HTTP API server
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Catalog file (implies source = file)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config {
        /// Write the default configuration if no file exists
        #[arg(long)]
        init: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.unwrap_or_else(Config::config_path);

    match cli.command {
        Some(Command::Catalog {
            source,
            file,
            limit,
        }) => {
            let mut config = Config::load_from(&config_path)?;
            if let Some(source) = source {
                config.catalog.source = source;
            }
            if let Some(file) = file {
                config.catalog.source = CatalogSource::File;
                config.catalog.file = file;
            }
            if let Some(limit) = limit {
                config.catalog.limit = limit;
            }
            commands::catalog(&config.catalog, output_mode)
        },
        Some(Command::Serve { host, port, file }) => {
            let mut config = Config::load_from(&config_path)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(file) = file {
                config.catalog.source = CatalogSource::File;
                config.catalog.file = file;
            }
            commands::serve(&config)
        },
        Some(Command::Config { init }) => commands::config(&config_path, init, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": roster::VERSION
                    })
                );
            } else {
                println!("roster v{}", roster::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": roster::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("roster v{}", roster::VERSION);
                println!("\nRun 'roster --help' for usage");
                println!("Run 'roster serve' to start the API server");
            }
            Ok(())
        },
    }
}
