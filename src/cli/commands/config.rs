//! Show or initialize the configuration file

use std::path::Path;

use roster::config::Config;
use roster::output::{ConfigResult, OperationResult, OutputMode};

/// Print the effective configuration, optionally writing the defaults first
pub fn config(path: &Path, init: bool, mode: OutputMode) -> anyhow::Result<()> {
    if init {
        if path.exists() {
            OperationResult {
                success: false,
                message: format!("Config already exists at {}", path.display()),
            }
            .render(mode);
            return Ok(());
        }

        Config::default().save_to(path)?;
        OperationResult {
            success: true,
            message: format!("Created {}", path.display()),
        }
        .render(mode);
        return Ok(());
    }

    ConfigResult {
        path: path.display().to_string(),
        exists: path.exists(),
        config: Config::load_from(path)?,
    }
    .render(mode);
    Ok(())
}
