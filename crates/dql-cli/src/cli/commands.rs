//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Add the parser limit args shared by commands that parse DQL.
fn with_fuel_args(cmd: Command) -> Command {
    cmd.arg(exec_fuel_arg()).arg(recursion_fuel_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("dql")
        .about("Doctrine Query Language parser and grammar inspector")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(kinds_command())
}

/// Show the syntax tree of a DQL source.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the syntax tree of a DQL source")
        .override_usage(
            "\
  dql ast <FILE>
  dql ast -q <TEXT>
  dql ast <FILE> --raw [--trivia]",
        )
        .after_help(
            r#"EXAMPLES:
  dql ast query.dql                      # statement outline
  dql ast query.dql --raw                # concrete syntax tree
  dql ast query.dql --raw --trivia       # CST with whitespace and comments
  dql ast -q 'SELECT u FROM User u'      # inline source
  cat query.dql | dql ast - --spans      # stdin, with byte ranges"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(raw_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
        .arg(color_arg());

    with_fuel_args(cmd)
}

/// Validate DQL sources.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate DQL sources")
        .override_usage(
            "\
  dql check <FILE>
  dql check <DIR>
  dql check -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  dql check query.dql                    # single file
  dql check queries/                     # every .dql file in a directory
  dql check - < query.dql                # stdin
  dql check -q 'DELETE FROM User u'      # inline source
  dql check query.dql --strict           # fail on warnings too"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_fuel_args(cmd)
}

/// Print the grammar's node kinds.
pub fn kinds_command() -> Command {
    Command::new("kinds")
        .about("Print the grammar's node kinds")
        .after_help(
            r#"EXAMPLES:
  dql kinds                              # one kind per line
  dql kinds --json                       # node-types style JSON"#,
        )
        .arg(json_arg())
}
