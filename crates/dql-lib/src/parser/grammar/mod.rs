//! Grammar productions for the Doctrine Query Language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Productions follow Doctrine's EBNF; keywords are case-insensitive.

mod atoms;
mod conditions;
mod expressions;
mod from;
mod functions;
mod select;
mod statements;
