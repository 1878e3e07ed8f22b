//! Configuration inspection CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Settings;
use crate::infrastructure::config::ConfigLoader;

/// Arguments for `shendegard config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the fully resolved configuration
    Show {
        /// Configuration file to resolve instead of config/config.yaml
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Resolve and validate the configuration
    Check {
        /// Configuration file to resolve instead of config/config.yaml
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

pub fn execute(args: ConfigArgs, json_mode: bool) -> Result<()> {
    match args.command {
        ConfigCommand::Show { file } => show(file, json_mode),
        ConfigCommand::Check { file } => check(file, json_mode),
    }
}

fn resolve(file: Option<PathBuf>) -> Result<Settings> {
    match file {
        Some(path) => ConfigLoader::load_from(path),
        None => ConfigLoader::load(),
    }
    .context("Failed to resolve configuration")
}

#[derive(Debug, serde::Serialize)]
struct ShowOutput {
    settings: Settings,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(["FIELD", "VALUE"].map(|h| Cell::new(h).set_alignment(CellAlignment::Left)));

        for (field, value) in rows(&self.settings) {
            table.add_row([Cell::new(field), Cell::new(value)]);
        }

        format!("Resolved configuration:\n{table}")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.settings).unwrap_or_default()
    }
}

/// Flatten the settings tree into display rows, masking secrets.
fn rows(settings: &Settings) -> Vec<(&'static str, String)> {
    vec![
        ("app.name", settings.app.name.clone()),
        ("app.version", settings.app.version.clone()),
        ("app.debug", settings.app.debug.to_string()),
        ("app.host", settings.app.host.clone()),
        ("app.port", settings.app.port.to_string()),
        ("cache.host", settings.cache.host.clone()),
        ("cache.port", settings.cache.port.to_string()),
        ("cache.password", mask(settings.cache.password.as_deref())),
        ("cache.db", settings.cache.db.to_string()),
        ("cache.ttl_ip", settings.cache.ttl_ip.to_string()),
        ("cache.ttl_domain", settings.cache.ttl_domain.to_string()),
        ("cache.ttl_hash", settings.cache.ttl_hash.to_string()),
        ("cache.ttl_url", settings.cache.ttl_url.to_string()),
        (
            "rate_limit.requests_per_minute",
            settings.rate_limit.requests_per_minute.to_string(),
        ),
        (
            "rate_limit.burst_allowance",
            settings.rate_limit.burst_allowance.to_string(),
        ),
        ("rate_limit.enabled", settings.rate_limit.enabled.to_string()),
        (
            "api_keys.virustotal",
            mask(settings.api_keys.virustotal.as_deref()),
        ),
        (
            "api_keys.abuseipdb",
            mask(settings.api_keys.abuseipdb.as_deref()),
        ),
        ("api_keys.otx", mask(settings.api_keys.otx.as_deref())),
    ]
}

/// Secrets never reach the terminal; only presence is reported.
fn mask(secret: Option<&str>) -> String {
    match secret {
        Some(_) => "********".to_string(),
        None => "(not set)".to_string(),
    }
}

fn show(file: Option<PathBuf>, json_mode: bool) -> Result<()> {
    let settings = resolve(file)?;
    output(&ShowOutput { settings }, json_mode);
    Ok(())
}

#[derive(Debug, serde::Serialize)]
struct CheckOutput {
    success: bool,
    app: String,
    version: String,
    debug: bool,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        format!(
            "Configuration OK: {} v{} (debug: {})",
            self.app, self.version, self.debug
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn check(file: Option<PathBuf>, json_mode: bool) -> Result<()> {
    let settings = resolve(file)?;
    let output_data = CheckOutput {
        success: true,
        app: settings.app.name,
        version: settings.app.version,
        debug: settings.app.debug,
    };
    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_hides_secret_material() {
        assert_eq!(mask(Some("hunter2")), "********");
        assert_eq!(mask(None), "(not set)");
    }

    #[test]
    fn test_rows_cover_every_field() {
        let settings = Settings::default();
        let rows = rows(&settings);
        assert_eq!(rows.len(), 19);
        assert!(rows.iter().any(|(f, v)| *f == "app.name" && v == "Shendegard"));
        assert!(rows
            .iter()
            .any(|(f, v)| *f == "api_keys.otx" && v == "(not set)"));
    }

    #[test]
    fn test_show_json_masks_nothing_but_omits_absent_keys() {
        let mut settings = Settings::default();
        settings.api_keys.virustotal = Some("abc123".to_string());

        let json = ShowOutput { settings }.to_json();
        assert_eq!(json["api_keys"]["virustotal"], "abc123");
        assert!(json["api_keys"].get("otx").is_none());
    }
}
