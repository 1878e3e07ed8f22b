//! Output formatting utilities for the CLI.

use serde::Serialize;

/// Dual-format command result: human-readable text or JSON.
pub trait CommandOutput: Serialize {
    /// Render for terminal display.
    fn to_human(&self) -> String;
    /// Render for `--json` mode.
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result in the mode the user asked for.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}
