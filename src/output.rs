//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::config::Config;
use crate::core::models::Item;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a catalog fetch
#[derive(Debug, Serialize)]
pub struct CatalogResult {
    /// Catalog source name ("pokeapi", "file")
    pub source: String,
    /// Number of items
    pub count: usize,
    /// The items
    pub items: Vec<Item>,
}

/// Effective configuration and where it was loaded from
#[derive(Debug, Serialize)]
pub struct ConfigResult {
    /// Config file path
    pub path: String,
    /// Whether the file exists (otherwise defaults are shown)
    pub exists: bool,
    /// Effective configuration
    pub config: Config,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl CatalogResult {
    /// Build a result from fetched items
    #[must_use]
    pub fn new(source: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            source: source.into(),
            count: items.len(),
            items,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable rendering, one line per item
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.items.is_empty() {
            return format!("Catalog ({}) is empty.", self.source);
        }

        let mut out = format!("Catalog ({}): {} item(s)\n", self.source, self.count);
        for item in &self.items {
            out.push_str(&format!(
                "\n  {:>4}  {:<16} {}",
                format!("#{}", item.id).dimmed(),
                item.name.bold(),
                item.types.join("/").cyan()
            ));
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ConfigResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        let note = if self.exists { "" } else { " (not found, using defaults)" };
        println!("Config: {}{}", self.path.bold(), note.dimmed());
        println!();
        print!("{}", toml::to_string_pretty(&self.config).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
