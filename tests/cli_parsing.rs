//! CLI argument parsing tests.

use clap::Parser;
use shendegard::cli::commands::config::ConfigCommand;
use shendegard::cli::{Cli, Commands};

#[test]
fn test_parse_init() {
    let cli = Cli::try_parse_from(["shendegard", "init"]).unwrap();

    match cli.command {
        Commands::Init(args) => {
            assert!(!args.force);
            assert_eq!(args.path.to_str(), Some("."));
        }
        Commands::Config(_) => panic!("Wrong top-level command"),
    }
    assert!(!cli.json);
}

#[test]
fn test_parse_init_with_force_and_path() {
    let cli = Cli::try_parse_from(["shendegard", "init", "--force", "/srv/shendegard"]).unwrap();

    match cli.command {
        Commands::Init(args) => {
            assert!(args.force);
            assert_eq!(args.path.to_str(), Some("/srv/shendegard"));
        }
        Commands::Config(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_config_show() {
    let cli = Cli::try_parse_from(["shendegard", "config", "show"]).unwrap();

    match cli.command {
        Commands::Config(args) => match args.command {
            ConfigCommand::Show { file } => assert!(file.is_none()),
            ConfigCommand::Check { .. } => panic!("Wrong config subcommand"),
        },
        Commands::Init(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_config_check_with_file() {
    let cli =
        Cli::try_parse_from(["shendegard", "config", "check", "--file", "staging.yaml"]).unwrap();

    match cli.command {
        Commands::Config(args) => match args.command {
            ConfigCommand::Check { file } => {
                assert_eq!(file.unwrap().to_str(), Some("staging.yaml"));
            }
            ConfigCommand::Show { .. } => panic!("Wrong config subcommand"),
        },
        Commands::Init(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_global_json_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["shendegard", "config", "show", "--json"]).unwrap();
    assert!(cli.json);
}

#[test]
fn test_missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["shendegard"]).is_err());
}
