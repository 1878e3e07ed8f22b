//! Implementation of the `shendegard init` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Settings;

/// Arguments for `shendegard init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// Result of the init command.
#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    /// Whether anything was written
    pub success: bool,
    /// Human-oriented status line
    pub message: String,
    /// Location of the configuration file
    pub config_file: PathBuf,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        if self.success {
            format!(
                "{}\n\nStarter configuration written to {}\nEdit it, or override any field via environment variables.",
                self.message,
                self.config_file.display()
            )
        } else {
            self.message.clone()
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Write a starter `config/config.yaml` populated with the compiled-in
/// defaults.
pub fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let config_dir = args.path.join("config");
    let config_file = config_dir.join("config.yaml");

    if config_file.exists() && !args.force {
        let output_data = InitOutput {
            success: false,
            message: "Configuration already initialized. Use --force to overwrite.".to_string(),
            config_file,
        };
        output(&output_data, json_mode);
        return Ok(());
    }

    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;

    let starter = serde_yaml::to_string(&Settings::default())
        .context("Failed to serialize default settings")?;
    std::fs::write(&config_file, starter)
        .with_context(|| format!("Failed to write {}", config_file.display()))?;

    let output_data = InitOutput {
        success: true,
        message: if args.force {
            "Configuration reinitialized.".to_string()
        } else {
            "Configuration initialized.".to_string()
        },
        config_file,
    };
    output(&output_data, json_mode);
    Ok(())
}
