//! Parser infrastructure for the Doctrine Query Language.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//! Key design decisions borrowed from rust-analyzer, rnix-parser, and taplo:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: operator layers (`OR`, `AND`, `+`, `*`) wrap their left
//!   operand retroactively, so a lone operand never gets an empty wrapper node
//! - Explicit recovery sets: per-production sets determine when to bail vs consume diagnostics
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Recovery follows these rules:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. `SELECT`, `UPDATE` and `DELETE` are top-level synchronization points
//! 4. On recursion limit, remaining input goes into single Error node
//!
//! However, fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    AbstractSchemaName, DeleteStatement, Direction, FromClause, Join, JoinKind, PathExpression,
    Root, SelectClause, SelectExpression, SelectStatement, Statement, UpdateStatement,
    WhereClause,
};

pub use self::core::{ParseResult, Parser};
