//! CLI tests

use clap::{CommandFactory, Parser};

use crate::{Cli, Commands, ConfigAction, OutputFormat, ProjectAction};

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_render_args_parsing() {
    let cli = Cli::try_parse_from([
        "folio",
        "render",
        "--catalog",
        "cards.toml",
        "--container",
        "grid",
        "--fragment",
    ])
    .unwrap();

    match cli.command {
        Commands::Render {
            catalog,
            output,
            container,
            fragment,
            pretty,
        } => {
            assert_eq!(catalog.unwrap().to_str(), Some("cards.toml"));
            assert!(output.is_none());
            assert_eq!(container.as_deref(), Some("grid"));
            assert!(fragment);
            assert!(!pretty);
        }
        _ => panic!("expected render command"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["folio", "projects", "list", "--format", "json", "-q"]).unwrap();
    assert!(cli.quiet);
    assert!(cli.format == OutputFormat::Json);
    assert!(matches!(
        cli.command,
        Commands::Projects {
            action: ProjectAction::List { catalog: None }
        }
    ));
}

#[test]
fn test_projects_show_requires_title() {
    assert!(Cli::try_parse_from(["folio", "projects", "show"]).is_err());
}

#[test]
fn test_config_set_parsing() {
    let cli = Cli::try_parse_from(["folio", "config", "set", "site.title", "My Work"]).unwrap();
    match cli.command {
        Commands::Config {
            action: ConfigAction::Set { key, value },
        } => {
            assert_eq!(key, "site.title");
            assert_eq!(value, "My Work");
        }
        _ => panic!("expected config set"),
    }
}

#[test]
fn test_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["folio", "--format", "yaml", "doctor"]).is_err());
}
