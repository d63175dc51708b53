//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::Fuel;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::kinds::KindsArgs;

pub struct AstParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub color: ColorChoice,
    pub fuel: Fuel,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            raw: m.get_flag("raw"),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
            fuel: parse_fuel(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            raw: p.raw,
            trivia: p.trivia,
            spans: p.spans,
            color: p.color.should_colorize(),
            fuel: p.fuel,
        }
    }
}

pub struct CheckParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub strict: bool,
    pub color: ColorChoice,
    pub fuel: Fuel,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
            fuel: parse_fuel(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            strict: p.strict,
            color: p.color.should_colorize(),
            fuel: p.fuel,
        }
    }
}

pub struct KindsParams {
    pub json: bool,
}

impl KindsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
        }
    }
}

impl From<KindsParams> for KindsArgs {
    fn from(p: KindsParams) -> Self {
        Self { json: p.json }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_fuel(m: &ArgMatches) -> Fuel {
    Fuel {
        exec: m.get_one::<u32>("exec_fuel").copied(),
        recursion: m.get_one::<u32>("recursion_fuel").copied(),
    }
}
