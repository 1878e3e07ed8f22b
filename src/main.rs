//! Shendegard CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shendegard::cli::{self, Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => cli::commands::init::execute(args, cli.json),
        Commands::Config(args) => cli::commands::config::execute(args, cli.json),
    };

    if let Err(err) = result {
        cli::handle_error(&err, cli.json);
    }
}
