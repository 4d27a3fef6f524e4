use clap::Parser;

use super::*;

#[test]
fn parses_debrief_generate_with_default_days() {
    let cli =
        Cli::try_parse_from(["intelbrief-cli", "debrief", "generate"]).expect("valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Debrief {
            command: debrief::DebriefCommands::Generate { days: 14 }
        }
    ));
}

#[test]
fn parses_debrief_generate_with_explicit_days() {
    let cli = Cli::try_parse_from(["intelbrief-cli", "debrief", "generate", "--days", "7"])
        .expect("valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Debrief {
            command: debrief::DebriefCommands::Generate { days: 7 }
        }
    ));
}

#[test]
fn rejects_zero_days() {
    let result = Cli::try_parse_from(["intelbrief-cli", "debrief", "generate", "--days", "0"]);
    assert!(result.is_err(), "days must be at least 1");
}

#[test]
fn rejects_days_beyond_cap() {
    let result = Cli::try_parse_from([
        "intelbrief-cli",
        "debrief",
        "generate",
        "--days",
        "9999999999",
    ]);
    assert!(result.is_err(), "days must be at most 3650");
}

#[test]
fn parses_debrief_list_with_default_limit() {
    let cli = Cli::try_parse_from(["intelbrief-cli", "debrief", "list"]).expect("valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Debrief {
            command: debrief::DebriefCommands::List { limit: 20 }
        }
    ));
}

#[test]
fn parses_debrief_show() {
    let cli = Cli::try_parse_from(["intelbrief-cli", "debrief", "show"]).expect("valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Debrief {
            command: debrief::DebriefCommands::Show
        }
    ));
}
