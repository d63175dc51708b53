//! Query facade: lex, parse and inspect a DQL source.
//!
//! Syntax problems end up in [`Diagnostics`]. Only fuel exhaustion is an `Err`.

mod dump;
mod printer;
pub use printer::QueryPrinter;


use rowan::GreenNodeBuilder;

use crate::diagnostics::Diagnostics;
use crate::parser::cst::SyntaxKind;
use crate::parser::lexer::lex;
use crate::parser::{ParseResult, Parser, Root, Statement, SyntaxNode};
use crate::{Error, Result};

pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

/// A parsed DQL source.
///
/// Create with [`new`](Self::new), optionally configure fuel limits,
/// then call [`exec`](Self::exec) to parse.
///
/// Check [`is_valid`](Self::is_valid) or [`diagnostics`](Self::diagnostics)
/// to determine if the source has syntax issues.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    source: &'a str,
    root: Root,
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
    exec_fuel_consumed: u32,
    diagnostics: Diagnostics,
}

fn empty_root() -> Root {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(SyntaxKind::SourceFile.into());
    builder.finish_node();
    let green = builder.finish();
    Root::cast(SyntaxNode::new_root(green)).expect("we just built a SourceFile node")
}

impl<'a> Query<'a> {
    /// Create a new query from source text.
    ///
    /// Call [`exec`](Self::exec) to parse it.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            root: empty_root(),
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
            exec_fuel_consumed: 0,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Set execution fuel limit. None = infinite.
    ///
    /// Execution fuel never replenishes. It protects against large inputs.
    /// Returns error from [`exec`](Self::exec) when exhausted.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    /// Set recursion depth limit. None = infinite.
    ///
    /// Recursion fuel restores when exiting recursion. It protects against
    /// deeply nested input. Returns error from [`exec`](Self::exec) when exhausted.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    /// Lex and parse the source.
    ///
    /// Returns `Err` if fuel limits are exceeded.
    /// Syntax diagnostics are accessible via [`diagnostics`](Self::diagnostics).
    pub fn exec(mut self) -> Result<Self> {
        let _span = tracing::debug_span!("parse", len = self.source.len()).entered();

        let tokens = lex(self.source);
        let parser = Parser::new(self.source, tokens)
            .with_exec_fuel(self.exec_fuel)
            .with_recursion_fuel(self.recursion_fuel);

        let ParseResult {
            root,
            diagnostics,
            exec_fuel_consumed,
        } = parser.parse().inspect_err(|err| tracing::debug!(%err, "parse aborted"))?;

        tracing::debug!(
            statements = root.statements().count(),
            errors = diagnostics.error_count(),
            warnings = diagnostics.warning_count(),
            exec_fuel_consumed,
            "parsed"
        );

        self.root = root;
        self.diagnostics = diagnostics;
        self.exec_fuel_consumed = exec_fuel_consumed;
        Ok(self)
    }

    /// Turns syntax errors into [`Error::ParseError`]. Warnings pass through.
    pub fn into_result(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::ParseError(self.diagnostics))
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        self.root.as_cst()
    }

    pub fn syntax(&self) -> &SyntaxNode {
        self.as_cst()
    }

    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.root.statements()
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Query is valid if there are no error-severity diagnostics (warnings are allowed).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

impl<'a> TryFrom<&'a str> for Query<'a> {
    type Error = crate::Error;

    fn try_from(source: &'a str) -> Result<Self> {
        Self::new(source).exec()
    }
}

impl<'a> TryFrom<&'a String> for Query<'a> {
    type Error = crate::Error;

    fn try_from(source: &'a String) -> Result<Self> {
        Self::new(source.as_str()).exec()
    }
}
