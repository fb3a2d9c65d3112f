use std::path::PathBuf;

use clap::Parser;
use textproc_config::{Cli, Commands, InputArgs, OutputFormat};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("should parse")
}

#[test]
fn defaults_to_markdown_without_overrides() {
    let cli = parse(&["textproc", "words", "--text", "hi"]);
    assert_eq!(cli.global.format, OutputFormat::Md);
    assert_eq!(cli.global.verbose, 0);
    assert!(cli.global.config.is_none());
    assert!(cli.global.max_chars.is_none());
    match cli.command {
        Commands::Words(input) => assert_eq!(input.text.as_deref(), Some("hi")),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn global_flags_work_after_subcommand() {
    let cli = parse(&[
        "textproc",
        "sentiment",
        "-t",
        "good",
        "--format",
        "json",
        "--max-chars",
        "50",
        "--negation-window",
        "4",
        "-vv",
    ]);
    assert_eq!(cli.global.format, OutputFormat::Json);
    assert_eq!(cli.global.max_chars, Some(50));
    assert_eq!(cli.global.negation_window, Some(4));
    assert_eq!(cli.global.verbose, 2);
}

#[test]
fn file_argument_is_positional() {
    let cli = parse(&["textproc", "--config", "custom.toml", "batch", "docs.txt"]);
    assert_eq!(cli.global.config, Some(PathBuf::from("custom.toml")));
    match cli.command {
        Commands::Batch(input) => assert_eq!(
            input,
            InputArgs {
                text: None,
                file: Some(PathBuf::from("docs.txt")),
            }
        ),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn text_and_file_conflict() {
    assert!(Cli::try_parse_from(["textproc", "clean", "--text", "x", "in.txt"]).is_err());
}

#[test]
fn unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["textproc", "words", "--format", "xml"]).is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["textproc"]).is_err());
}

#[test]
fn version_takes_no_input() {
    let cli = parse(&["textproc", "version"]);
    assert!(matches!(cli.command, Commands::Version));
}
