//! Grammar descriptor for the "dql" language.
//!
//! A single immutable [`Language`] value describes the vocabulary of the grammar:
//! node kinds, keywords, fields and extras. It is created on first access and lives
//! for the rest of the process. [`language`] hands out a shared reference,
//! [`tree_sitter_dql`] the same value as a raw pointer for C callers.
//!
//! Node kind ids are the `SyntaxKind` discriminants, so ids round-trip through
//! rowan trees without a lookup table. Field ids start at 1, as in tree-sitter.

use std::sync::LazyLock;

use rowan::Language as _;
use serde::Serialize;

use crate::Result;
use crate::parser::cst::{DqlLang, SyntaxKind};
use crate::query::Query;

/// Version of the descriptor layout. Bumped whenever node kind ids change.
pub const LANGUAGE_VERSION: u32 = 1;

const FIELD_NAMES: &[&str] = &[
    "alias",
    "condition",
    "declarations",
    "distinct",
    "entity",
    "expressions",
    "field",
    "items",
    "keyword",
    "object",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildMatch {
    Kind(SyntaxKind),
    AnyNode,
}

impl ChildMatch {
    fn matches(self, child: SyntaxKind) -> bool {
        match self {
            ChildMatch::Kind(kind) => kind == child,
            ChildMatch::AnyNode => child.is_node() && child != SyntaxKind::Error,
        }
    }
}

/// Which child of which parent carries which field. First match wins.
const FIELD_RULES: &[(SyntaxKind, ChildMatch, &str)] = {
    use ChildMatch::{AnyNode, Kind};
    use SyntaxKind::*;
    &[
        (SelectClause, Kind(KwSelect), "keyword"),
        (SelectClause, Kind(KwDistinct), "distinct"),
        (SelectClause, Kind(SelectExpression), "expressions"),
        (FromClause, Kind(KwFrom), "keyword"),
        (FromClause, Kind(IdentificationVariableDeclaration), "declarations"),
        (WhereClause, Kind(KwWhere), "keyword"),
        (WhereClause, AnyNode, "condition"),
        (HavingClause, Kind(KwHaving), "keyword"),
        (HavingClause, AnyNode, "condition"),
        (GroupByClause, Kind(KwGroup), "keyword"),
        (GroupByClause, Kind(KwBy), "keyword"),
        (GroupByClause, Kind(GroupByItem), "items"),
        (OrderByClause, Kind(KwOrder), "keyword"),
        (OrderByClause, Kind(KwBy), "keyword"),
        (OrderByClause, Kind(OrderByItem), "items"),
        (UpdateClause, Kind(KwUpdate), "keyword"),
        (UpdateClause, Kind(AbstractSchemaName), "entity"),
        (UpdateClause, Kind(AliasIdentificationVariable), "alias"),
        (UpdateClause, Kind(UpdateItem), "items"),
        (DeleteClause, Kind(KwDelete), "keyword"),
        (DeleteClause, Kind(AbstractSchemaName), "entity"),
        (DeleteClause, Kind(AliasIdentificationVariable), "alias"),
        (RangeVariableDeclaration, Kind(AbstractSchemaName), "entity"),
        (RangeVariableDeclaration, Kind(AliasIdentificationVariable), "alias"),
        (PathExpression, Kind(IdentificationVariable), "object"),
        (PathExpression, Kind(FieldIdentificationVariable), "field"),
    ]
};

/// One entry of the node kind table.
#[derive(Debug, Clone, Serialize)]
pub struct NodeKindInfo {
    pub id: u16,
    #[serde(rename = "type")]
    pub name: &'static str,
    pub named: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub extra: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub keyword: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<&'static str>,
}

/// Immutable description of the DQL grammar.
#[derive(Debug)]
pub struct Language {
    name: &'static str,
    version: u32,
    /// Canonical keyword spellings, sorted for binary search.
    keywords: Vec<(&'static str, SyntaxKind)>,
}

static LANGUAGE: LazyLock<Language> = LazyLock::new(Language::build);

/// The DQL grammar descriptor.
///
/// Every call returns the same reference. Safe to call from any thread.
pub fn language() -> &'static Language {
    &LANGUAGE
}

/// C entry point for hosts that load grammars by symbol name.
///
/// Returns the same descriptor as [`language`]; the pointer is never null
/// and stays valid for the lifetime of the process.
#[unsafe(no_mangle)]
pub extern "C" fn tree_sitter_dql() -> *const Language {
    language()
}

impl Language {
    fn build() -> Self {
        let mut keywords: Vec<_> = SyntaxKind::all()
            .filter_map(|kind| kind.keyword_text().map(|text| (text, kind)))
            .collect();
        keywords.sort_unstable_by_key(|(text, _)| *text);
        tracing::debug!(keywords = keywords.len(), "grammar descriptor initialized");
        Self {
            name: "dql",
            version: LANGUAGE_VERSION,
            keywords,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn node_kind_count(&self) -> usize {
        SyntaxKind::__LAST as usize
    }

    pub fn node_kind_for_id(&self, id: u16) -> Option<&'static str> {
        kind_for_id(id).map(SyntaxKind::grammar_name)
    }

    /// Looks up a node kind by grammar name. Kinds sharing a name resolve to the first one.
    pub fn id_for_node_kind(&self, name: &str, named: bool) -> Option<u16> {
        SyntaxKind::all()
            .find(|kind| kind.is_named() == named && kind.grammar_name() == name)
            .map(|kind| kind as u16)
    }

    pub fn node_kind_is_named(&self, id: u16) -> bool {
        kind_for_id(id).is_some_and(SyntaxKind::is_named)
    }

    /// Whitespace is consumed silently and never shows up as a node.
    pub fn node_kind_is_visible(&self, id: u16) -> bool {
        kind_for_id(id).is_some_and(|kind| kind != SyntaxKind::Whitespace)
    }

    /// Extras may appear anywhere between tokens.
    pub fn node_kind_is_extra(&self, id: u16) -> bool {
        kind_for_id(id).is_some_and(SyntaxKind::is_trivia)
    }

    pub fn field_count(&self) -> usize {
        FIELD_NAMES.len()
    }

    pub fn field_name_for_id(&self, id: u16) -> Option<&'static str> {
        let index = usize::from(id).checked_sub(1)?;
        FIELD_NAMES.get(index).copied()
    }

    pub fn field_id_for_name(&self, name: &str) -> Option<u16> {
        let index = FIELD_NAMES.binary_search(&name).ok()?;
        u16::try_from(index + 1).ok()
    }

    /// Field names a node kind can carry, in declaration order.
    pub fn fields_for_node_kind(&self, id: u16) -> Vec<&'static str> {
        let Some(kind) = kind_for_id(id) else {
            return Vec::new();
        };
        let mut fields = Vec::new();
        for (parent, _, field) in FIELD_RULES {
            if *parent == kind && !fields.contains(field) {
                fields.push(*field);
            }
        }
        fields
    }

    /// Field under which `child` appears inside `parent`, if any.
    pub fn field_name_for_child(
        &self,
        parent: SyntaxKind,
        child: SyntaxKind,
    ) -> Option<&'static str> {
        FIELD_RULES
            .iter()
            .find(|(p, m, _)| *p == parent && m.matches(child))
            .map(|(_, _, field)| *field)
    }

    /// Case-insensitive keyword lookup: `select`, `Select` and `SELECT` are the same keyword.
    pub fn keyword(&self, text: &str) -> Option<SyntaxKind> {
        let upper = text.bytes().map(|b| b.to_ascii_uppercase());
        self.keywords
            .binary_search_by(|(kw, _)| kw.bytes().cmp(upper.clone()))
            .ok()
            .map(|index| self.keywords[index].1)
    }

    /// All keywords in alphabetical order of their canonical spelling.
    pub fn keywords(&self) -> impl Iterator<Item = (&'static str, SyntaxKind)> + '_ {
        self.keywords.iter().copied()
    }

    /// Reserved words cannot name entities, aliases or variables.
    pub fn is_reserved(&self, text: &str) -> bool {
        self.keyword(text).is_some_and(SyntaxKind::is_reserved)
    }

    /// Parses DQL source with default limits.
    pub fn parse<'q>(&self, source: &'q str) -> Result<Query<'q>> {
        Query::try_from(source)
    }

    /// Visible node kinds, one entry per distinct (name, named) pair.
    pub fn node_kinds(&self) -> Vec<NodeKindInfo> {
        let mut kinds: Vec<NodeKindInfo> = Vec::new();
        for kind in SyntaxKind::all() {
            let id = kind as u16;
            if !self.node_kind_is_visible(id) {
                continue;
            }
            let name = kind.grammar_name();
            let named = kind.is_named();
            if kinds.iter().any(|k| k.name == name && k.named == named) {
                continue;
            }
            kinds.push(NodeKindInfo {
                id,
                name,
                named,
                extra: self.node_kind_is_extra(id),
                keyword: kind.is_keyword(),
                fields: self.fields_for_node_kind(id),
            });
        }
        kinds
    }

    /// Node kind table as pretty-printed JSON, in the spirit of `node-types.json`.
    pub fn node_kinds_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.node_kinds())
    }
}

fn kind_for_id(id: u16) -> Option<SyntaxKind> {
    (id < SyntaxKind::__LAST as u16).then(|| DqlLang::kind_from_raw(rowan::SyntaxKind(id)))
}
