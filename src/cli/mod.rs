//! Command-line interface for Shendegard.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser)]
#[command(name = "shendegard")]
#[command(about = "Shendegard - threat intelligence platform configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the project configuration directory
    Init(commands::init::InitArgs),

    /// Inspect and check the resolved configuration
    Config(commands::config::ConfigArgs),
}

/// Print a command error and exit non-zero.
///
/// Fatal configuration errors land here from `main`, so a process with an
/// unresolvable configuration refuses to start instead of running with a
/// partial document.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    if json_mode {
        let payload = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
