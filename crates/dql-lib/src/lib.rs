//! DQL: the Doctrine Query Language grammar, implemented natively.
//!
//! The crate exposes a process-wide grammar descriptor ([`language`]) and a
//! resilient parser that turns DQL text into a lossless syntax tree.
//!
//! # Example
//!
//! ```
//! use dql_lib::Query;
//!
//! let source = "SELECT u FROM App\\Entity\\User u WHERE u.id = :id";
//!
//! let query = Query::try_from(source).expect("out of fuel");
//! assert!(query.is_valid());
//! eprintln!("{}", query.diagnostics().render(source));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod language;
pub mod parser;
pub mod query;


pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use language::{Language, language, tree_sitter_dql};
pub use query::{Query, QueryPrinter};

/// Errors that can occur during parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("query parsing failed with {} errors", .0.error_count())]
    ParseError(Diagnostics),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;
