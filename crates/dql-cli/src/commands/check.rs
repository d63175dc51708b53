//! Validate DQL sources. Silent on stdout; diagnostics go to stderr.

use std::path::PathBuf;

use super::Fuel;
use super::source_loader::{SourceFile, load_sources};

pub struct CheckArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub strict: bool,
    pub color: bool,
    pub fuel: Fuel,
}

/// Result of checking a batch of sources.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub failed: usize,
    pub diagnostics: String,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.failed == 0
    }
}

pub fn run(args: CheckArgs) {
    let sources = match load_sources(args.query_path.as_deref(), args.query_text.as_deref()) {
        Ok(sources) => sources,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let report = check_sources(&sources, args.strict, args.color, args.fuel);
    eprint!("{}", report.diagnostics);

    if !report.is_ok() {
        std::process::exit(1);
    }
}

pub fn check_sources(sources: &[SourceFile], strict: bool, color: bool, fuel: Fuel) -> CheckReport {
    let mut report = CheckReport::default();

    for source in sources {
        let query = match fuel.parse(&source.text) {
            Ok(query) => query,
            Err(e) => {
                report
                    .diagnostics
                    .push_str(&format!("error: {}: {}\n", source.name, e));
                report.failed += 1;
                continue;
            }
        };

        let diagnostics = query.diagnostics();
        let valid = if strict {
            !diagnostics.has_errors() && !diagnostics.has_warnings()
        } else {
            query.is_valid()
        };

        tracing::debug!(
            source = %source.name,
            errors = diagnostics.error_count(),
            warnings = diagnostics.warning_count(),
            valid,
            "checked"
        );

        if !diagnostics.is_empty() {
            report.diagnostics.push_str(
                &diagnostics
                    .filtered_printer(&source.text)
                    .path(&source.name)
                    .colored(color)
                    .render(),
            );
            report.diagnostics.push('\n');
        }
        if !valid {
            report.failed += 1;
        }
    }

    report
}
