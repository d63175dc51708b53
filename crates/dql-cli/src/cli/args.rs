//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so that commands compose the same
//! definitions.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// DQL file, directory of `.dql` files, or `-` for stdin (positional).
pub fn query_path_arg() -> Arg {
    Arg::new("query_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("query_text")
        .help("DQL file, directory of .dql files, or - for stdin")
}

/// Inline query text (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .help("Inline DQL text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Print the concrete syntax tree (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Print the concrete syntax tree instead of the outline")
}

/// Keep whitespace and comments in the CST (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .requires("raw")
        .help("Include whitespace and comments (with --raw)")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Emit JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the node kind table as JSON")
}

/// Parser operation limit (--exec-fuel).
pub fn exec_fuel_arg() -> Arg {
    Arg::new("exec_fuel")
        .long("exec-fuel")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Parser operation limit")
}

/// Nesting depth limit (--recursion-fuel).
pub fn recursion_fuel_arg() -> Arg {
    Arg::new("recursion_fuel")
        .long("recursion-fuel")
        .value_name("N")
        .default_value("512")
        .value_parser(value_parser!(u32))
        .help("Nesting depth limit")
}

/// Log verbosity (-v, -vv). `DQL_LOG` takes precedence.
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log verbosity (-v for debug, -vv for trace)")
}
